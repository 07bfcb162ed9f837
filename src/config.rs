use tracing::info;

/// Hosting-environment variable naming the booking service endpoint.
pub const API_URL_VAR: &str = "CITAFLOW_API_URL";

/// Runtime configuration. The endpoint is recorded for diagnostics only
/// while the mock backend is in use.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var(API_URL_VAR).ok().filter(|v| !v.is_empty()),
        }
    }

    pub fn log(&self) {
        match &self.api_url {
            Some(url) => info!(%url, "booking service endpoint configured (unused, mock backend active)"),
            None => info!("no booking service endpoint configured, mock backend active"),
        }
    }
}
