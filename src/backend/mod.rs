//! Contracts for the booking service. The wizard only ever talks to the
//! backend through [`BookingBackend`]; the bundled [`MockBackend`] stands in
//! for the real service.

mod mock;

pub use mock::MockBackend;

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;
use tracing::warn;

use crate::models::{Center, Confirmation, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("no record matches the supplied identifier")]
    NotFound,
    #[error("the selected slot is no longer available")]
    Conflict,
    #[error("the request was rejected: {0}")]
    Validation(String),
    #[error("could not reach the booking service: {0}")]
    Transport(String),
}

impl BackendError {
    /// Transport failures may succeed on a second attempt; everything else
    /// is a definitive answer and must not be retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, BackendError::Transport(_))
    }
}

/// Everything the confirmation call needs; dates and times travel as the
/// wire strings the user picked (`YYYY-MM-DD`, `HH:MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    pub user_id: String,
    pub center_id: String,
    pub date: String,
    pub time: String,
}

pub trait BookingBackend: 'static {
    /// Resolve an identifier (national ID or event code) to a profile.
    /// Idempotent and safe to retry.
    fn lookup_identity(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<UserProfile, BackendError>>;

    /// The full center catalog. Order carries no meaning.
    fn list_centers(&self) -> impl Future<Output = Result<Vec<Center>, BackendError>>;

    /// Dates with at least one free slot at the given center.
    fn available_dates(
        &self,
        center_id: &str,
        today: Date,
    ) -> impl Future<Output = Result<Vec<Date>, BackendError>>;

    /// Free times of day at the given center on the given date.
    fn available_times(
        &self,
        center_id: &str,
        date: Date,
    ) -> impl Future<Output = Result<Vec<String>, BackendError>>;

    /// Book the slot. May fail with [`BackendError::Conflict`] when the slot
    /// was taken in the meantime.
    fn confirm_appointment(
        &self,
        request: &ConfirmationRequest,
    ) -> impl Future<Output = Result<Confirmation, BackendError>>;
}

/// Ceiling on any single backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause before the single retry of a transport failure.
pub const RETRY_BACKOFF: Duration = Duration::from_millis(400);

/// Run a backend call with a timeout, retrying exactly once on a transport
/// failure. `NotFound`, `Validation` and `Conflict` answers are returned
/// as-is; a timed-out call counts as a transport failure.
pub async fn with_retry<T, Fut>(
    label: &str,
    op: impl Fn() -> Fut,
) -> Result<T, BackendError>
where
    Fut: Future<Output = Result<T, BackendError>>,
{
    match attempt(&op).await {
        Err(err) if err.is_transient() => {
            warn!(error = %err, "{label} hit a transport failure, retrying once");
            tokio::time::sleep(RETRY_BACKOFF).await;
            attempt(&op).await
        }
        outcome => outcome,
    }
}

async fn attempt<T, Fut>(op: &impl Fn() -> Fut) -> Result<T, BackendError>
where
    Fut: Future<Output = Result<T, BackendError>>,
{
    match tokio::time::timeout(REQUEST_TIMEOUT, op()).await {
        Ok(outcome) => outcome,
        Err(_) => Err(BackendError::Transport("request timed out".to_string())),
    }
}
