use reqwest::StatusCode;
use shared::domain::SlotKey;
use thiserror::Error;

/// Fixed user-facing message shown for any failed submission.
pub const GENERIC_SUBMIT_ERROR: &str =
    "Failed to generate schedule. Please check your files and try again.";

/// Why a schedule submission did not produce a result.
///
/// The UI collapses the request-lifecycle variants to [`GENERIC_SUBMIT_ERROR`];
/// the structured cause is kept for logs and diagnostics.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("missing datasets: {}", format_keys(.0))]
    MissingDatasets(Vec<SlotKey>),
    #[error("a submission is already in flight")]
    AlreadyInFlight,
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server rejected the request with status {0}")]
    Status(StatusCode),
    #[error("could not decode the schedule response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl SubmitError {
    /// True for refusals that never issued a request and left the
    /// submission state untouched.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            SubmitError::MissingDatasets(_) | SubmitError::AlreadyInFlight
        )
    }
}

fn format_keys(keys: &[SlotKey]) -> String {
    keys.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
