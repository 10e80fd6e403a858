mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent,
    orchestration::dispatch_backend_command,
    reducer::{apply_ui_event, AppModel},
};
use crate::ui::DirectoryApp;

const APP_TITLE: &str = "People of Star Wars";

#[derive(Parser, Debug)]
struct Args {
    /// API base URL; overrides directory.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Show a failure screen instead of the spinner when loading fails.
    #[arg(long)]
    surface_load_errors: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_base_url = api_url;
    }
    settings.surface_load_errors |= args.surface_load_errors;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(8);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(8);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let mut model = AppModel::new(settings.surface_load_errors);
    if let Err(err) = dispatch_backend_command(&cmd_tx, BackendCommand::LoadDirectory { settings }) {
        tracing::error!("could not start directory load: {}", err.message());
        model = apply_ui_event(model, UiEvent::LoadFailed(err));
    }
    // The load runs once per session; no further commands are sent.
    drop(cmd_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([720.0, 860.0])
            .with_min_inner_size([480.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DirectoryApp::new(ui_rx, model)))),
    )
}
