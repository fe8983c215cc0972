//! Text entry box shown while a label is being typed.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::TEXT_INPUT_OFFSET;
use crate::theme;

use super::input::TextInputFocus;
use super::state::OverlayState;

/// UI system for the pending text - shows an egui text input next to the click point
pub fn pending_text_input_ui(
    mut contexts: EguiContexts,
    mut overlay: ResMut<OverlayState>,
    mut focus: ResMut<TextInputFocus>,
) -> Result {
    // Only show while a text entry is open
    let Some(screen_anchor) = overlay.pending_text().map(|pending| pending.screen_anchor) else {
        focus.requested = false;
        return Ok(());
    };

    let text_color = theme::bevy_to_egui(overlay.tool().color);
    let font_size = overlay.tool().font_size;

    let mut should_commit = false;
    let mut should_cancel = false;

    egui::Area::new(egui::Id::new("pending_text_input"))
        .order(egui::Order::Tooltip)
        .fixed_pos(egui::pos2(
            screen_anchor.x + TEXT_INPUT_OFFSET,
            screen_anchor.y + TEXT_INPUT_OFFSET,
        ))
        .show(contexts.ctx_mut()?, |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::WHITE)
                .stroke(egui::Stroke::new(2.0, theme::ui::TEXT_INPUT_BORDER))
                .show(ui, |ui| {
                    let Some(pending) = overlay.pending_text_mut() else {
                        return;
                    };

                    let response = ui.add(
                        egui::TextEdit::singleline(&mut pending.content)
                            .hint_text("Type your text...")
                            .desired_width(200.0)
                            .text_color(text_color)
                            .font(egui::FontId::proportional(font_size)),
                    );

                    let pointer_released = ui.input(|i| i.pointer.any_released());
                    if focus.should_request(response.has_focus(), pointer_released) {
                        response.request_focus();
                    }

                    // Finalize on Enter
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        should_commit = true;
                    }

                    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                        should_cancel = true;
                    }

                    ui.label(
                        egui::RichText::new("Press Enter to save, Esc to cancel")
                            .size(11.0)
                            .color(theme::ui::HINT_TEXT),
                    );
                });
        });

    if should_cancel {
        overlay.cancel_pending_text();
    } else if should_commit {
        overlay.commit_pending_text();
    }

    Ok(())
}
