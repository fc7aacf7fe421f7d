//! Application shell: file pickers, submission flow, and the schedule table.

use std::fs;
use std::time::Duration;

use client_core::{FileSlots, SlotFile, SubmissionPhase, GENERIC_SUBMIT_ERROR};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{domain::SlotKey, protocol::ScheduleAssignment};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

const SCHEDULE_COLUMNS: [&str; 4] = ["Student Name", "Subject", "Teacher Name", "Slot ID"];

pub struct SchedulerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    server_url: String,
    slots: FileSlots,

    phase: SubmissionPhase,
    schedule: Vec<ScheduleAssignment>,
    error_message: Option<String>,
    status: String,
}

impl SchedulerApp {
    pub fn new(
        server_url: String,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            server_url,
            slots: FileSlots::new(),
            phase: SubmissionPhase::Idle,
            schedule: Vec::new(),
            error_message: None,
            status: "Backend worker starting...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ScheduleReady(assignments) => {
                    self.phase = SubmissionPhase::Succeeded;
                    self.error_message = None;
                    self.status = format!("Schedule ready: {} assignments", assignments.len());
                    self.schedule = assignments;
                }
                UiEvent::SubmitRejected(reason) => {
                    if self.phase == SubmissionPhase::Submitting {
                        self.phase = SubmissionPhase::Idle;
                    }
                    self.status = format!("Submission refused: {reason}");
                }
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    if err.context() == UiErrorContext::GenerateSchedule {
                        self.phase = SubmissionPhase::Failed;
                        self.schedule.clear();
                        self.error_message = Some(GENERIC_SUBMIT_ERROR.to_string());
                    }
                    self.status = format!("{} error: {}", err_label(err.category()), err.message());
                }
            }
        }
    }

    fn pick_slot_file(&mut self, key: SlotKey) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .pick_file()
        else {
            return;
        };
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("dataset.csv")
            .to_string();
        match fs::read(&path) {
            Ok(bytes) => {
                self.status = format!("Selected {filename} for {}", key.label());
                self.slots.set(key, Some(SlotFile::new(filename, bytes)));
            }
            Err(err) => {
                self.status = format!("Failed to read {}: {err}", path.display());
            }
        }
    }

    fn try_submit(&mut self) {
        if self.phase == SubmissionPhase::Submitting || !self.slots.all_present() {
            return;
        }
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::GenerateSchedule {
                slots: self.slots.clone(),
            },
            &mut self.status,
        );
        if queued {
            // Prior outcome is cleared before the request is issued.
            self.phase = SubmissionPhase::Submitting;
            self.schedule.clear();
            self.error_message = None;
            self.status = "Generating schedule...".to_string();
        }
    }

    fn show_upload_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Upload CSV Files");
        ui.add_space(6.0);

        for key in SlotKey::ALL {
            ui.label(egui::RichText::new(key.label()).strong());
            ui.horizontal(|ui| {
                if ui.button("Choose file…").clicked() {
                    self.pick_slot_file(key);
                }
                match self.slots.get(key) {
                    Some(file) => {
                        ui.label(format!(
                            "{} ({})",
                            file.filename,
                            human_readable_bytes(file.size_bytes())
                        ));
                    }
                    None => {
                        ui.weak("No file selected");
                    }
                }
            });
            ui.add_space(4.0);
        }

        ui.add_space(8.0);
        let can_submit =
            self.phase != SubmissionPhase::Submitting && self.slots.all_present();
        ui.horizontal(|ui| {
            let submit = egui::Button::new(egui::RichText::new("Generate Schedule").strong());
            if ui.add_enabled(can_submit, submit).clicked() {
                self.try_submit();
            }
            if self.phase == SubmissionPhase::Submitting {
                ui.spinner();
                ui.label("Generating…");
            }
        });

        if !self.slots.all_present() {
            let missing = self
                .slots
                .missing()
                .iter()
                .map(|key| key.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            ui.small(format!("Required: {missing}"));
        }

        if let Some(message) = &self.error_message {
            ui.add_space(6.0);
            ui.colored_label(egui::Color32::from_rgb(220, 80, 80), message);
        }
    }

    fn show_schedule_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Remedial Class Schedule");
        ui.add_space(6.0);

        if self.schedule.is_empty() {
            if self.phase == SubmissionPhase::Submitting {
                ui.weak("Waiting for the scheduling service…");
            } else {
                ui.weak("No schedule generated yet.");
            }
            return;
        }

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("schedule_table")
                    .striped(true)
                    .min_col_width(120.0)
                    .show(ui, |ui| {
                        for header in SCHEDULE_COLUMNS {
                            ui.label(egui::RichText::new(header).strong());
                        }
                        ui.end_row();
                        // Rows render in response order.
                        for assignment in &self.schedule {
                            ui.label(&assignment.student_name);
                            ui.label(&assignment.subject);
                            ui.label(&assignment.teacher_name);
                            ui.label(&assignment.slot_id);
                            ui.end_row();
                        }
                    });
            });
    }
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("Service: {}", self.server_url));
                });
            });
        });

        egui::SidePanel::left("upload_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                self.show_upload_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_schedule_panel(ui);
        });

        // Backend events arrive off-thread; poll while a request is in flight.
        if self.phase == SubmissionPhase::Submitting {
            ctx.request_repaint_after(Duration::from_millis(150));
        }
    }
}

fn human_readable_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        let text = format!("{value:.1}");
        let text = text.trim_end_matches(".0");
        format!("{text} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiError;
    use crossbeam_channel::bounded;

    fn assignment(student: &str) -> ScheduleAssignment {
        ScheduleAssignment {
            student_name: student.to_string(),
            subject: "Math".to_string(),
            teacher_name: "Mr. Lee".to_string(),
            slot_id: "S1".to_string(),
        }
    }

    #[test]
    fn formats_dataset_sizes_readably() {
        assert_eq!(human_readable_bytes(0), "0 B");
        assert_eq!(human_readable_bytes(1023), "1023 B");
        assert_eq!(human_readable_bytes(1024), "1 KB");
        assert_eq!(human_readable_bytes(1536), "1.5 KB");
        assert_eq!(human_readable_bytes(2 * 1024 * 1024), "2 MB");
    }

    #[test]
    fn schedule_ready_keeps_event_order_and_clears_errors() {
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(4);
        let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
        let mut app = SchedulerApp::new("http://127.0.0.1:8000".to_string(), cmd_tx, ui_rx);
        app.error_message = Some(GENERIC_SUBMIT_ERROR.to_string());

        ui_tx
            .try_send(UiEvent::ScheduleReady(vec![
                assignment("Zoe"),
                assignment("Alice"),
            ]))
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.phase, SubmissionPhase::Succeeded);
        assert_eq!(app.error_message, None);
        let students: Vec<&str> = app
            .schedule
            .iter()
            .map(|row| row.student_name.as_str())
            .collect();
        assert_eq!(students, vec!["Zoe", "Alice"]);
    }

    #[test]
    fn failed_submission_replaces_previous_rows_with_the_fixed_message() {
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(4);
        let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
        let mut app = SchedulerApp::new("http://127.0.0.1:8000".to_string(), cmd_tx, ui_rx);
        app.phase = SubmissionPhase::Submitting;
        app.schedule = vec![assignment("Alice")];

        ui_tx
            .try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::GenerateSchedule,
                "server rejected the request with status 500",
            )))
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.phase, SubmissionPhase::Failed);
        assert!(app.schedule.is_empty());
        assert_eq!(app.error_message.as_deref(), Some(GENERIC_SUBMIT_ERROR));
    }

    #[test]
    fn startup_errors_touch_only_the_status_line() {
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(4);
        let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
        let mut app = SchedulerApp::new("http://127.0.0.1:8000".to_string(), cmd_tx, ui_rx);

        ui_tx
            .try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                "backend worker startup failure: failed to build runtime",
            )))
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.phase, SubmissionPhase::Idle);
        assert_eq!(app.error_message, None);
        assert!(app.status.contains("backend worker startup failure"));
    }

    #[test]
    fn refusal_notice_resets_the_loading_state() {
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(4);
        let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
        let mut app = SchedulerApp::new("http://127.0.0.1:8000".to_string(), cmd_tx, ui_rx);
        app.phase = SubmissionPhase::Submitting;

        ui_tx
            .try_send(UiEvent::SubmitRejected(
                "a submission is already in flight".to_string(),
            ))
            .expect("queue event");
        app.process_ui_events();

        assert_eq!(app.phase, SubmissionPhase::Idle);
        assert_eq!(app.error_message, None);
        assert!(app.status.contains("Submission refused"));
    }

    #[test]
    fn submit_is_skipped_while_slots_are_incomplete() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
        let (_ui_tx, ui_rx) = bounded::<UiEvent>(4);
        let mut app = SchedulerApp::new("http://127.0.0.1:8000".to_string(), cmd_tx, ui_rx);

        app.try_submit();

        assert_eq!(app.phase, SubmissionPhase::Idle);
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn submit_with_full_slots_queues_one_command_and_clears_prior_outcome() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
        let (_ui_tx, ui_rx) = bounded::<UiEvent>(4);
        let mut app = SchedulerApp::new("http://127.0.0.1:8000".to_string(), cmd_tx, ui_rx);
        for key in SlotKey::ALL {
            app.slots
                .set(key, Some(SlotFile::new(format!("{key}.csv"), b"x".to_vec())));
        }
        app.schedule = vec![assignment("Alice")];
        app.error_message = Some(GENERIC_SUBMIT_ERROR.to_string());

        app.try_submit();

        assert_eq!(app.phase, SubmissionPhase::Submitting);
        assert!(app.schedule.is_empty());
        assert_eq!(app.error_message, None);
        let BackendCommand::GenerateSchedule { slots } =
            cmd_rx.try_recv().expect("one queued command");
        assert!(slots.all_present());
        assert!(cmd_rx.try_recv().is_err());
    }
}
