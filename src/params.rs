//! Common SystemParam bundles and input helpers shared by the diagram and overlay.
//!
//! ## Available Bundles
//!
//! - [`CameraParams`]: Camera and window access for cursor-to-world conversion
//!
//! ## Helper Functions
//!
//! - [`is_cursor_over_ui`]: Check if cursor is over egui UI (for input gating)
//! - [`wants_keyboard_input`]: Check if an egui text field has keyboard focus

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::stage::DiagramCamera;

/// Bundled camera and window queries for cursor-to-world calculations
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<DiagramCamera>>,
}

impl CameraParams<'_, '_> {
    /// Cursor position in window logical pixels (top-left origin)
    pub fn cursor_screen_pos(&self) -> Option<Vec2> {
        self.window.single().ok()?.cursor_position()
    }

    /// Get the world position of the cursor, if available
    pub fn cursor_world_pos(&self) -> Option<Vec2> {
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = self.cursor_screen_pos()?;
        camera.viewport_to_world_2d(transform, cursor_pos).ok()
    }

    /// Project a world position onto the window
    pub fn world_to_screen(&self, world: Vec2) -> Option<Vec2> {
        let (camera, transform) = self.camera.single().ok()?;
        camera.world_to_viewport(transform, world.extend(0.0)).ok()
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}

/// Check if egui is consuming keystrokes (a text field has focus)
pub fn wants_keyboard_input(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}
