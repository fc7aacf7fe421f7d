//! Client core for the remedial schedule service: dataset slot store,
//! submission controller, and the HTTP transport used to reach the
//! scheduler endpoint. UI-free by design.

use reqwest::{multipart, Client};
use shared::{domain::SlotKey, protocol::ScheduleAssignment};
use tracing::debug;

pub mod error;
pub mod slots;
pub mod submission;

pub use error::{SubmitError, GENERIC_SUBMIT_ERROR};
pub use slots::{FileSlots, SlotFile};
pub use submission::{SubmissionController, SubmissionPhase, SubmissionState};

/// HTTP client for the scheduling service.
#[derive(Debug, Clone)]
pub struct SchedulerClient {
    http: Client,
    base_url: String,
}

impl SchedulerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the four datasets as one multipart request and decodes the
    /// assignment array, preserving the response order.
    pub async fn generate_schedule(
        &self,
        slots: &FileSlots,
    ) -> Result<Vec<ScheduleAssignment>, SubmitError> {
        let mut form = multipart::Form::new();
        for key in SlotKey::ALL {
            let file = slots
                .get(key)
                .ok_or_else(|| SubmitError::MissingDatasets(slots.missing()))?;
            let part = multipart::Part::bytes(file.bytes.clone()).file_name(file.filename.clone());
            form = form.part(key.as_str(), part);
        }

        debug!(url = %self.base_url, "posting schedule request");
        let response = self
            .http
            .post(format!("{}/generate-schedule", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status));
        }

        response
            .json::<Vec<ScheduleAssignment>>()
            .await
            .map_err(SubmitError::Decode)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
