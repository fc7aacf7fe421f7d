use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::SchedulerApp;

/// Desktop client for the remedial class scheduling service.
#[derive(Debug, Parser)]
#[command(name = "schedule-desk")]
struct Cli {
    /// Base URL of the scheduling service.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cli.server_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Remedial Schedule Desk")
            .with_inner_size([1080.0, 680.0])
            .with_min_inner_size([820.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Remedial Schedule Desk",
        options,
        Box::new(move |_cc| Ok(Box::new(SchedulerApp::new(cli.server_url, cmd_tx, ui_rx)))),
    )
}
