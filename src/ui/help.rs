use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::params::wants_keyboard_input;

#[derive(Resource, Default)]
pub struct HelpWindowState {
    pub is_open: bool,
}

/// Renders the help popup window with keyboard shortcuts
pub fn help_popup_ui(mut contexts: EguiContexts, mut help_state: ResMut<HelpWindowState>) -> Result {
    if !help_state.is_open {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    egui::Window::new("Help")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(400.0)
        .show(ctx, |ui| {
            ui.heading("Edgeshift - Migration Presenter");
            ui.separator();

            ui.heading("Stages");
            egui::Grid::new("stages_grid")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("1 / 2 / 3");
                    ui.label("Current state / DNS migration / Full proxy");
                    ui.end_row();

                    ui.strong("Left / Right");
                    ui.label("Previous / next stage");
                    ui.end_row();

                    ui.strong("Click proxy node");
                    ui.label("Show Cloudflare features (drawing off)");
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.separator();

            ui.heading("Annotations");
            egui::Grid::new("annotation_grid")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("D");
                    ui.label("Draw - Click and drag for freehand lines");
                    ui.end_row();

                    ui.strong("T");
                    ui.label("Text - Click to place a label");
                    ui.end_row();

                    ui.strong("Enter / Escape");
                    ui.label("Save / discard the label being typed");
                    ui.end_row();

                    ui.strong("X");
                    ui.label("Stop drawing");
                    ui.end_row();

                    ui.strong("Delete");
                    ui.label("Clear all annotations");
                    ui.end_row();

                    ui.strong("F1");
                    ui.label("Toggle this help window");
                    ui.end_row();
                });

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                if ui.button("Close").clicked() {
                    help_state.is_open = false;
                }
            });
        });

    // Close on Escape key
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        help_state.is_open = false;
    }

    Ok(())
}

/// Handles the F1 keyboard shortcut to toggle help window
pub fn handle_help_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut help_state: ResMut<HelpWindowState>,
    mut contexts: EguiContexts,
) {
    // Don't toggle if typing in a text field
    if wants_keyboard_input(&mut contexts) {
        return;
    }

    if keyboard.just_pressed(KeyCode::F1) {
        help_state.is_open = !help_state.is_open;
    }
}
