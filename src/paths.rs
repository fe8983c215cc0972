//! Where the presenter keeps its settings file and debug logs.
//!
//! A `cargo run` or debug build keeps everything next to the working
//! directory so a checkout stays self-contained. Installed builds use the
//! platform config location (`~/.config/edgeshift/` on Linux,
//! `%APPDATA%\edgeshift\` on Windows, `~/Library/Application Support/edgeshift/`
//! on macOS) for both.

use std::path::PathBuf;

const APP_DIR_NAME: &str = "edgeshift";
const CONFIG_FILE_NAME: &str = "config.json";

/// Running from a checkout rather than an installed binary
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Directory holding `config.json` and `logs/`
pub fn app_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }
    dirs::config_dir().map(|p| p.join(APP_DIR_NAME))
}

pub fn config_file() -> PathBuf {
    app_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

pub fn logs_dir() -> PathBuf {
    app_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Create the app directory up front so the first settings save has somewhere to land
pub fn ensure_directories() -> std::io::Result<()> {
    match app_dir() {
        Some(dir) if !is_dev_mode() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}
