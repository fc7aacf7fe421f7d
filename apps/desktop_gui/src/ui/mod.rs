//! UI layer for the desktop app: app shell and rendering.

pub mod app;

pub use app::SchedulerApp;
