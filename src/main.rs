use clap::Parser;
use time::OffsetDateTime;

use citaflow::config::Config;

#[derive(Parser)]
#[command(name = "citaflow")]
#[command(about = "Book and verify service-center appointments")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Start the wizard at a specific step (diagnostic)
    #[arg(long, value_name = "STEP")]
    step: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let filter = if args.verbose { "citaflow=debug" } else { "citaflow=info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    config.log();

    // Calendar date in the user's timezone; UTC when the offset cannot be
    // determined (sandboxed environments).
    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();

    #[cfg(feature = "gui")]
    {
        citaflow::gui::run(citaflow::gui::AppFlags {
            today,
            start_step: args.step,
        })
        .map_err(|err| anyhow::anyhow!("failed to run the wizard: {err}"))
    }

    #[cfg(not(feature = "gui"))]
    {
        let _ = today;
        anyhow::bail!("citaflow was built without the `gui` feature")
    }
}
