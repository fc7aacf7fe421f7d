//! UI/backend events and error modeling for the desktop controller.

use shared::protocol::ScheduleAssignment;

pub enum UiEvent {
    ScheduleReady(Vec<ScheduleAssignment>),
    SubmitRejected(String),
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    ServerStatus,
    Decode,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    GenerateSchedule,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("decode") {
            UiErrorCategory::Decode
        } else if lower.contains("status") || lower.contains("rejected the request") {
            UiErrorCategory::ServerStatus
        } else if lower.contains("timeout")
            || lower.contains("timed out")
            || lower.contains("connection")
            || lower.contains("connect")
            || lower.contains("network")
            || lower.contains("transport")
            || lower.contains("dns")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::ServerStatus => "Server",
        UiErrorCategory::Decode => "Response",
        UiErrorCategory::Unknown => "Unexpected",
    }
}
