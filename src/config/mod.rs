use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_FONT_SIZE, DEFAULT_REVEAL_DELAY_SECS, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
use crate::stage::Stage;
use crate::theme;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

fn default_stroke_color() -> String {
    theme::color_to_hex(theme::ANNOTATION_DEFAULT)
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

fn default_reveal_delay_secs() -> f32 {
    DEFAULT_REVEAL_DELAY_SECS
}

/// Presenter preferences persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Annotation color selected on startup, as `#rrggbb`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,

    /// Annotation font size selected on startup
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Stage shown when the curtain opens
    #[serde(default)]
    pub start_stage: Stage,

    /// Seconds before the intro curtain opens by itself
    #[serde(default = "default_reveal_delay_secs")]
    pub reveal_delay_secs: f32,

    /// Start with the curtain already open
    #[serde(default)]
    pub skip_intro: bool,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            font_size: default_font_size(),
            start_stage: Stage::default(),
            reveal_delay_secs: default_reveal_delay_secs(),
            skip_intro: false,
        }
    }
}

impl AppConfigData {
    /// Stored color, or the default red if the string doesn't parse
    pub fn stroke_color(&self) -> Color {
        theme::parse_hex_color(&self.stroke_color).unwrap_or_else(|| {
            warn!("Invalid stroke color {:?} in config, using default", self.stroke_color);
            theme::ANNOTATION_DEFAULT
        })
    }

    pub fn font_size(&self) -> f32 {
        if self.font_size.is_finite() {
            self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
        } else {
            DEFAULT_FONT_SIZE
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to remember the toolbar's color and font size for next launch
#[derive(Message)]
pub struct UpdateToolDefaultsRequest {
    pub color: Color,
    pub font_size: f32,
}

/// Parse config file contents. The error string is shown to the user.
fn parse_config(json: &str) -> Result<AppConfigData, String> {
    serde_json::from_str(json).map_err(|e| format!("Configuration file was corrupted: {}", e))
}

/// Load configuration from disk, returning the reset reason if defaults were used
fn load_config(config_path: &Path) -> (AppConfigData, Option<String>) {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return (AppConfigData::default(), None);
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => match parse_config(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", config_path);
                (data, None)
            }
            Err(reason) => {
                warn!("Failed to parse config file: {}", reason);
                (AppConfigData::default(), Some(reason))
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Could not read configuration file: {}", e)),
            )
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let (data, reset_reason) = load_config(&config.config_path);
    config.data = data;
    config.dirty = false;

    if let Some(reason) = reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to store new tool defaults
fn update_tool_defaults_system(
    mut events: MessageReader<UpdateToolDefaultsRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        let stroke_color = theme::color_to_hex(event.color);
        if config.data.stroke_color == stroke_color && config.data.font_size == event.font_size {
            continue;
        }
        config.data.stroke_color = stroke_color;
        config.data.font_size = event.font_size;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        debug!(
            "Tool defaults now {} at {}px",
            config.data.stroke_color, config.data.font_size
        );
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<UpdateToolDefaultsRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    update_tool_defaults_system.run_if(on_message::<UpdateToolDefaultsRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(data.stroke_color, "#ef4444");
        assert_eq!(data.font_size, 16.0);
        assert_eq!(data.start_stage, Stage::Before);
        assert_eq!(data.reveal_delay_secs, 50.0);
        assert!(!data.skip_intro);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let data = parse_config(r#"{ "start_stage": "proxy" }"#).unwrap();
        assert_eq!(data.start_stage, Stage::Proxy);
        assert_eq!(data.stroke_color, "#ef4444");
        assert_eq!(data.reveal_delay_secs, 50.0);
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            stroke_color: "#3b82f6".to_string(),
            font_size: 24.0,
            start_stage: Stage::DnsOnly,
            reveal_delay_secs: 5.0,
            skip_intro: true,
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed = parse_config(&json).unwrap();

        assert_eq!(parsed.stroke_color, data.stroke_color);
        assert_eq!(parsed.font_size, data.font_size);
        assert_eq!(parsed.start_stage, data.start_stage);
        assert!(parsed.skip_intro);
    }

    #[test]
    fn test_corrupted_config_reports_reason() {
        let err = parse_config("{ not json").unwrap_err();
        assert!(err.starts_with("Configuration file was corrupted"));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let data = AppConfigData {
            stroke_color: "crimson".to_string(),
            ..Default::default()
        };
        assert_eq!(data.stroke_color(), theme::ANNOTATION_DEFAULT);
    }

    #[test]
    fn test_font_size_clamped() {
        let mut data = AppConfigData {
            font_size: 200.0,
            ..Default::default()
        };
        assert_eq!(data.font_size(), 72.0);
        data.font_size = 2.0;
        assert_eq!(data.font_size(), 8.0);
        data.font_size = f32::NAN;
        assert_eq!(data.font_size(), DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_config_reset_notification_default() {
        let notification = ConfigResetNotification::default();
        assert!(!notification.show);
        assert!(notification.reason.is_none());
    }
}
