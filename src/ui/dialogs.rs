use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{AppConfig, ConfigResetNotification, SaveConfigRequest};
use crate::stage::Stage;

/// State for the settings dialog
#[derive(Resource, Default)]
pub struct SettingsDialogState {
    /// Whether the dialog is open
    pub is_open: bool,
    /// Edited values are stale and must be reloaded from config
    needs_load: bool,
    pub start_stage: Stage,
    pub skip_intro: bool,
    pub reveal_delay_secs: f32,
    /// Whether changes have been made
    pub has_changes: bool,
}

impl SettingsDialogState {
    pub fn open(&mut self) {
        self.is_open = true;
        self.needs_load = true;
    }

    /// Initialize the dialog state from current config
    pub fn load_from_config(&mut self, config: &AppConfig) {
        self.start_stage = config.data.start_stage;
        self.skip_intro = config.data.skip_intro;
        self.reveal_delay_secs = config.data.reveal_delay_secs;
        self.has_changes = false;
        self.needs_load = false;
    }

    /// Write the edited values back; returns true if anything differed
    pub fn apply_to_config(&self, config: &mut AppConfig) -> bool {
        let data = &mut config.data;
        let changed = data.start_stage != self.start_stage
            || data.skip_intro != self.skip_intro
            || data.reveal_delay_secs != self.reveal_delay_secs;
        if changed {
            data.start_stage = self.start_stage;
            data.skip_intro = self.skip_intro;
            data.reveal_delay_secs = self.reveal_delay_secs;
            config.dirty = true;
        }
        changed
    }
}

/// Renders the presentation settings dialog
pub fn settings_dialog_ui(
    mut contexts: EguiContexts,
    mut dialog_state: ResMut<SettingsDialogState>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    if !dialog_state.is_open {
        return Ok(());
    }

    if dialog_state.needs_load {
        dialog_state.load_from_config(&config);
    }

    let mut should_close = false;
    let mut should_save = false;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .min_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.heading("Presentation Settings");
            ui.add_space(12.0);

            ui.group(|ui| {
                ui.label(egui::RichText::new("Startup").strong());
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label("First stage:");
                    egui::ComboBox::from_id_salt("settings_start_stage")
                        .selected_text(dialog_state.start_stage.info().nav_label)
                        .show_ui(ui, |ui| {
                            for stage in Stage::all() {
                                let selected = dialog_state.start_stage == *stage;
                                if ui.selectable_label(selected, stage.info().nav_label).clicked() {
                                    dialog_state.start_stage = *stage;
                                    dialog_state.has_changes = true;
                                }
                            }
                        });
                });

                ui.add_space(4.0);

                if ui
                    .checkbox(&mut dialog_state.skip_intro, "Skip intro curtain")
                    .changed()
                {
                    dialog_state.has_changes = true;
                }

                ui.horizontal(|ui| {
                    ui.label("Auto-reveal after:");
                    let skip_intro = dialog_state.skip_intro;
                    let response = ui.add_enabled(
                        !skip_intro,
                        egui::DragValue::new(&mut dialog_state.reveal_delay_secs)
                            .range(0.0..=600.0)
                            .speed(1.0)
                            .suffix(" s"),
                    );
                    if response.changed() {
                        dialog_state.has_changes = true;
                    }
                });

                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Startup settings take effect the next time the app starts.")
                        .weak()
                        .small(),
                );
            });

            ui.add_space(16.0);

            // Action buttons
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(dialog_state.has_changes, egui::Button::new("Save"))
                    .clicked()
                {
                    should_save = true;
                }

                if ui.button("Cancel").clicked() {
                    should_close = true;
                }
            });
        });

    if should_save {
        if dialog_state.apply_to_config(&mut config) {
            save_events.write(SaveConfigRequest);
            info!("Presentation settings updated");
        }
        should_close = true;
    }

    if should_close {
        dialog_state.is_open = false;
        dialog_state.has_changes = false;
    }

    Ok(())
}

/// Tells the presenter their config file was unreadable and defaults are in use
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings could not be loaded and have been reset to defaults.");

            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }

            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                notification.show = false;
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_marks_for_reload() {
        let mut state = SettingsDialogState::default();
        state.open();
        assert!(state.is_open);
        assert!(state.needs_load);
    }

    #[test]
    fn test_load_then_apply_without_edits_is_unchanged() {
        let mut config = AppConfig::default();
        let mut state = SettingsDialogState::default();
        state.load_from_config(&config);
        assert!(!state.apply_to_config(&mut config));
        assert!(!config.dirty);
    }

    #[test]
    fn test_apply_marks_config_dirty() {
        let mut config = AppConfig::default();
        let mut state = SettingsDialogState::default();
        state.load_from_config(&config);
        state.start_stage = Stage::Proxy;
        state.skip_intro = true;

        assert!(state.apply_to_config(&mut config));
        assert!(config.dirty);
        assert_eq!(config.data.start_stage, Stage::Proxy);
        assert!(config.data.skip_intro);
    }
}
