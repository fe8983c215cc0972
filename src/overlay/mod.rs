//! Annotation overlay for live presentation: freehand strokes and text labels
//! drawn on a transparent canvas above the diagram.
//!
//! The overlay owns a small state machine ([`OverlayState`]) with three phases:
//! `Idle` (drawing disabled), `Ready` (enabled, nothing captured) and
//! `Capturing` (a path or a pending text is active). Bevy systems translate
//! window input into calls on that state; everything else is plain data.
//!
//! ## Module Structure
//!
//! - [`components`] - Finalized annotations (Stroke, TextLabel)
//! - [`state`] - Tool settings, capture buffers and the state machine
//! - [`transform`] - Screen-space to canvas-space conversion
//! - [`surface`] - The screen rectangle the overlay covers
//! - [`wrap`] - Word wrapping for labels
//! - [`scene`] - Ordered render list
//! - [`input`] - Pointer and keyboard systems
//! - [`rendering`] - egui painter system
//! - [`text_input`] - Text entry box
//!
//! Annotations live only in memory; they are gone when the app closes.

mod components;
mod input;
mod rendering;
mod scene;
mod state;
mod surface;
mod text_input;
mod transform;
mod wrap;


// Re-exports - Types
pub use state::{OverlayPhase, OverlayState, ToolMode};
pub use surface::OverlaySurface;

// Re-exports - Helpers
pub use input::activate_tool;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::conditions::{is_revealed, no_dialog_open};
use crate::config::{AppConfig, ConfigLoaded};

/// Seed color and font size from the saved preferences
fn apply_tool_defaults(config: Res<AppConfig>, mut overlay: ResMut<OverlayState>) {
    overlay.set_color(config.data.stroke_color());
    overlay.set_font_size(config.data.font_size());
}

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverlayState>()
            .init_resource::<OverlaySurface>()
            .init_resource::<input::TextInputFocus>()
            .add_systems(Startup, apply_tool_defaults.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    input::handle_overlay_shortcuts.run_if(no_dialog_open),
                    input::handle_overlay_pointer,
                    input::update_cursor_icon,
                )
                    .chain()
                    .run_if(is_revealed),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (rendering::render_overlay, text_input::pending_text_input_ui)
                    .chain()
                    .after(crate::ui::UiSet)
                    .run_if(is_revealed),
            );
    }
}
