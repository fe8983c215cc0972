mod conditions;
mod config;
mod constants;
mod overlay;
mod params;
mod paths;
mod shell;
mod stage;
pub mod theme;
mod ui;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

#[cfg(debug_assertions)]
const LOG_FILE_NAME: &str = "edgeshift.log";

/// Mark where this run begins in the shared log file
#[cfg(debug_assertions)]
fn write_session_marker(path: &std::path::Path) {
    use std::io::Write;

    let Ok(mut file) = std::fs::OpenOptions::new().append(true).open(path) else {
        return;
    };
    let rule = "-".repeat(72);
    let started = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let _ = writeln!(file, "\n{rule}\nedgeshift session {started}\n{rule}");
}

/// Debug builds log to stdout and `logs/edgeshift.log`
#[cfg(debug_assertions)]
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = paths::logs_dir();
    if let Err(e) = std::fs::create_dir_all(&logs_dir) {
        eprintln!("Could not create {}: {}", logs_dir.display(), e);
        return None;
    }
    write_session_marker(&logs_dir.join(LOG_FILE_NAME));

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME));

    // RUST_LOG wins over the default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,edgeshift=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging() -> Option<()> {
    None
}

fn main() {
    // Dropping the guard stops the file writer
    let _log_guard = setup_logging();

    if let Err(e) = paths::ensure_directories() {
        eprintln!("Settings will not be saved: {}", e);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Edgeshift - Cloudflare Migration".into(),
                resolution: (DEFAULT_WINDOW_WIDTH as u32, DEFAULT_WINDOW_HEIGHT as u32).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(config::ConfigPlugin)
        .add_plugins(shell::ShellPlugin)
        .add_plugins(stage::StagePlugin)
        .add_plugins(overlay::OverlayPlugin)
        .add_plugins(ui::UiPlugin)
        .run();
}
