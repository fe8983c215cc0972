use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::UpdateToolDefaultsRequest;
use crate::constants::FONT_SIZE_OPTIONS;
use crate::overlay::{activate_tool, OverlayPhase, OverlayState, ToolMode};
use crate::stage::{CurrentStage, SetStageRequest, Stage};
use crate::theme;

use super::dialogs::SettingsDialogState;
use super::help::HelpWindowState;

/// Main toolbar with the title, stage navigation and app buttons
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    current: Res<CurrentStage>,
    mut stage_requests: MessageWriter<SetStageRequest>,
    mut help_state: ResMut<HelpWindowState>,
    mut settings_state: ResMut<SettingsDialogState>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                ui.label(
                    egui::RichText::new("Cloudflare Onboarding Process Transition")
                        .size(16.0)
                        .strong(),
                );

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                // Stage buttons with keyboard shortcuts
                for (index, stage) in Stage::all().iter().enumerate() {
                    let info = stage.info();
                    let selected = current.stage() == *stage;

                    let button = egui::Button::new(
                        egui::RichText::new(format!("{} {}", index + 1, info.nav_label))
                            .size(14.0)
                            .strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(selected);

                    let response = ui.add(button);
                    if response.clicked() && !selected {
                        stage_requests.write(SetStageRequest { stage: *stage });
                    }
                    response.on_hover_text(info.title);
                }

                // Right-aligned app buttons
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Help (F1)").clicked() {
                        help_state.is_open = !help_state.is_open;
                    }
                    if ui.button("Settings").clicked() {
                        settings_state.open();
                    }
                });
            });
        });
    Ok(())
}

/// Secondary toolbar with the annotation tools
pub fn annotation_toolbar_ui(
    mut contexts: EguiContexts,
    mut overlay: ResMut<OverlayState>,
    mut defaults_events: MessageWriter<UpdateToolDefaultsRequest>,
) -> Result {
    let mut defaults_changed = false;

    egui::TopBottomPanel::top("annotation_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 6))
                .fill(theme::ui::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                ui.label(egui::RichText::new("Annotate:").color(theme::ui::LABEL_TEXT));

                let enabled = overlay.tool().enabled;
                let mode = overlay.tool().mode;

                for (tool_mode, label) in [(ToolMode::Draw, "✏ Draw"), (ToolMode::Text, "Add Text")] {
                    let response = ui.add(
                        egui::Button::new(label).selected(enabled && mode == tool_mode),
                    );
                    if response.clicked() {
                        activate_tool(&mut overlay, tool_mode);
                    }
                    response.on_hover_text(tool_mode.display_name());
                }

                if enabled
                    && ui
                        .button("Stop")
                        .on_hover_text("Stop drawing (X)")
                        .clicked()
                {
                    overlay.set_drawing_enabled(false);
                    info!("Annotation drawing stopped");
                }

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                // Color selection
                ui.label("Color:");
                let current_color = theme::bevy_to_egui(overlay.tool().color);
                for (swatch, name) in theme::ANNOTATION_PALETTE {
                    let is_selected = current_color == swatch;

                    let button = egui::Button::new("")
                        .fill(swatch)
                        .min_size(egui::vec2(18.0, 18.0))
                        .stroke(if is_selected {
                            egui::Stroke::new(2.0, theme::ui::SELECTED_BORDER)
                        } else {
                            egui::Stroke::new(1.0, theme::ui::UNSELECTED_BORDER)
                        });

                    let response = ui.add(button);
                    if response.clicked() && !is_selected {
                        overlay.set_color(theme::egui_to_bevy(swatch));
                        defaults_changed = true;
                    }
                    response.on_hover_text(name);
                }

                // Font size only matters for text labels
                if mode == ToolMode::Text {
                    ui.add_space(12.0);
                    ui.label("Size:");
                    let font_size = overlay.tool().font_size;
                    let selected_text = FONT_SIZE_OPTIONS
                        .iter()
                        .find(|(size, _)| *size == font_size)
                        .map(|(_, name)| name.to_string())
                        .unwrap_or_else(|| format!("{} px", font_size));
                    egui::ComboBox::from_id_salt("annotation_font_size")
                        .selected_text(selected_text)
                        .width(90.0)
                        .show_ui(ui, |ui| {
                            for (size, name) in FONT_SIZE_OPTIONS {
                                if ui.selectable_label(font_size == size, name).clicked()
                                    && font_size != size
                                {
                                    overlay.set_font_size(size);
                                    defaults_changed = true;
                                }
                            }
                        });
                }

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                if ui
                    .add_enabled(!overlay.is_empty(), egui::Button::new("Clear All"))
                    .on_hover_text("Remove every annotation (Delete)")
                    .clicked()
                {
                    overlay.clear_all();
                    info!("Cleared all annotations");
                }

                if overlay.phase() != OverlayPhase::Idle {
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(mode.hint())
                            .color(theme::ui::HINT_TEXT)
                            .size(11.0),
                    );
                }
            });
        });

    if defaults_changed {
        defaults_events.write(UpdateToolDefaultsRequest {
            color: overlay.tool().color,
            font_size: overlay.tool().font_size,
        });
    }

    Ok(())
}
