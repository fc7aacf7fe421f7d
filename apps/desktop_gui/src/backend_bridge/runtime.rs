//! Worker thread driving the submission controller off the GUI thread.

use std::thread;

use client_core::{SchedulerClient, SubmissionController};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let controller = SubmissionController::new(SchedulerClient::new(server_url));
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::GenerateSchedule { slots } => {
                        tracing::info!("backend: generate_schedule");
                        match controller.submit(&slots).await {
                            Ok(assignments) => {
                                let _ = ui_tx.try_send(UiEvent::ScheduleReady(assignments));
                            }
                            Err(err) if err.is_refusal() => {
                                tracing::warn!("backend: submission refused: {err}");
                                let _ = ui_tx.try_send(UiEvent::SubmitRejected(err.to_string()));
                            }
                            Err(err) => {
                                tracing::error!("backend: generate_schedule failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::GenerateSchedule,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                }
            }
        });
    });
}
