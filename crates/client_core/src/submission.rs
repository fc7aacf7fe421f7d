//! Submission lifecycle: state machine and controller.

use std::sync::Arc;

use shared::protocol::ScheduleAssignment;
use tokio::sync::{broadcast, Mutex};
use tracing::{error, info};

use crate::{
    error::{SubmitError, GENERIC_SUBMIT_ERROR},
    slots::FileSlots,
    SchedulerClient,
};

/// Lifecycle stage of the current schedule submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Observable submission state.
///
/// `assignments` and `error_message` are mutually exclusive: at most one
/// is populated at any time. Both are cleared before a new request is
/// issued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    pub phase: SubmissionPhase,
    pub error_message: Option<String>,
    pub assignments: Vec<ScheduleAssignment>,
}

/// Drives schedule submissions against the remote scheduling service.
///
/// Owns the submission state and exposes it through [`state`] snapshots
/// and [`subscribe`] broadcasts, so the full lifecycle can be exercised
/// without a rendering environment.
///
/// [`state`]: SubmissionController::state
/// [`subscribe`]: SubmissionController::subscribe
pub struct SubmissionController {
    client: SchedulerClient,
    state: Mutex<SubmissionState>,
    events: broadcast::Sender<SubmissionState>,
}

impl SubmissionController {
    pub fn new(client: SchedulerClient) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            client,
            state: Mutex::new(SubmissionState::default()),
            events,
        })
    }

    /// Snapshot of the current submission state.
    pub async fn state(&self) -> SubmissionState {
        self.state.lock().await.clone()
    }

    /// Subscribes to state snapshots published on every transition.
    pub fn subscribe(&self) -> broadcast::Receiver<SubmissionState> {
        self.events.subscribe()
    }

    /// Runs one submission to completion.
    ///
    /// Refuses without touching state while a submission is in flight or
    /// while any dataset slot is empty. An accepted submission clears any
    /// prior result or error before the request is issued, sends exactly
    /// one request, and leaves the `Submitting` phase exactly when the
    /// single outcome arrives. Failures record [`GENERIC_SUBMIT_ERROR`]
    /// in the state; the structured cause is returned and logged.
    pub async fn submit(
        &self,
        slots: &FileSlots,
    ) -> Result<Vec<ScheduleAssignment>, SubmitError> {
        {
            let mut state = self.state.lock().await;
            if state.phase == SubmissionPhase::Submitting {
                return Err(SubmitError::AlreadyInFlight);
            }
            let missing = slots.missing();
            if !missing.is_empty() {
                return Err(SubmitError::MissingDatasets(missing));
            }

            state.phase = SubmissionPhase::Submitting;
            state.error_message = None;
            state.assignments.clear();
            self.publish(&state);
        }

        info!("submitting schedule request");
        match self.client.generate_schedule(slots).await {
            Ok(assignments) => {
                let mut state = self.state.lock().await;
                state.phase = SubmissionPhase::Succeeded;
                state.assignments = assignments.clone();
                self.publish(&state);
                info!(rows = assignments.len(), "schedule request succeeded");
                Ok(assignments)
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.phase = SubmissionPhase::Failed;
                state.error_message = Some(GENERIC_SUBMIT_ERROR.to_string());
                state.assignments.clear();
                self.publish(&state);
                error!("schedule request failed: {err}");
                Err(err)
            }
        }
    }

    fn publish(&self, state: &SubmissionState) {
        let _ = self.events.send(state.clone());
    }
}
