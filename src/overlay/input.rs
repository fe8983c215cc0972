//! Feeds window input into the overlay state machine.

use bevy::prelude::*;
use bevy::window::{CursorIcon, CursorMoved, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::params::{is_cursor_over_ui, wants_keyboard_input};

use super::state::{OverlayPhase, OverlayState, PointerOutcome, ToolMode};
use super::surface::OverlaySurface;
use super::transform::CanvasTransform;

/// Keeps the label text box focused while an entry is open
#[derive(Resource, Default, Debug)]
pub struct TextInputFocus {
    /// Set when a text entry opens; cleared once a settled frame sees the box focused
    pub requested: bool,
}

impl TextInputFocus {
    /// Whether the text box should ask for focus this frame. The click that
    /// opened the entry releases outside the box and takes focus away again,
    /// so a fresh request only settles on a frame with no pointer release.
    /// Focus lost later while the entry stays open is reclaimed.
    pub fn should_request(&mut self, has_focus: bool, pointer_released: bool) -> bool {
        if has_focus && !pointer_released {
            self.requested = false;
        }
        self.requested || !has_focus
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayShortcut {
    Tool(ToolMode),
    Stop,
    ClearAll,
}

/// Keyboard shortcut pressed this frame. Keys typed into an open text entry
/// belong to the label, never to a shortcut.
pub fn overlay_shortcut(keyboard: &ButtonInput<KeyCode>, overlay: &OverlayState) -> Option<OverlayShortcut> {
    if overlay.pending_text().is_some() {
        return None;
    }

    if keyboard.just_pressed(KeyCode::KeyD) {
        Some(OverlayShortcut::Tool(ToolMode::Draw))
    } else if keyboard.just_pressed(KeyCode::KeyT) {
        Some(OverlayShortcut::Tool(ToolMode::Text))
    } else if keyboard.just_pressed(KeyCode::KeyX) {
        Some(OverlayShortcut::Stop)
    } else if keyboard.just_pressed(KeyCode::Delete) && !overlay.is_empty() {
        Some(OverlayShortcut::ClearAll)
    } else {
        None
    }
}

/// Apply one frame of left-button input. `press_at` is the cursor position
/// when a press landed on the canvas. Moves reported on the release frame
/// happened before the release and still extend the path.
pub fn apply_pointer_frame(
    overlay: &mut OverlayState,
    buttons: &ButtonInput<MouseButton>,
    press_at: Option<Vec2>,
    moves: impl IntoIterator<Item = Vec2>,
    transform: CanvasTransform,
) -> PointerOutcome {
    let mut outcome = PointerOutcome::Ignored;

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(screen) = press_at {
            outcome = overlay.on_pointer_down(screen, transform);
        }
    } else if buttons.pressed(MouseButton::Left) || buttons.just_released(MouseButton::Left) {
        for screen in moves {
            overlay.on_pointer_move(screen, transform);
        }
    }

    if buttons.just_released(MouseButton::Left) {
        overlay.on_pointer_up();
    }

    outcome
}

/// Switch to `mode` and turn drawing on, as the Draw / Add Text buttons do
pub fn activate_tool(overlay: &mut OverlayState, mode: ToolMode) {
    overlay.set_drawing_enabled(true);
    overlay.set_tool_mode(mode);
    info!("Annotation tool: {:?}", mode);
}

pub fn handle_overlay_pointer(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: MessageReader<CursorMoved>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    surface: Res<OverlaySurface>,
    mut overlay: ResMut<OverlayState>,
    mut focus: ResMut<TextInputFocus>,
    mut contexts: EguiContexts,
) {
    if overlay.phase() == OverlayPhase::Idle {
        cursor_moved.clear();
        return;
    }

    // Toolbars, panels and the text box keep their clicks
    let press_at = if mouse_button.just_pressed(MouseButton::Left) {
        window_query
            .single()
            .ok()
            .and_then(|window| window.cursor_position())
            .filter(|pos| surface.contains(*pos) && !is_cursor_over_ui(&mut contexts))
    } else {
        None
    };

    // Rebuilt for every event so a relayout between frames is picked up
    let transform = surface.transform();
    let moves: Vec<Vec2> = cursor_moved.read().map(|event| event.position).collect();

    if apply_pointer_frame(&mut overlay, &mouse_button, press_at, moves, transform)
        == PointerOutcome::FocusTextInput
    {
        focus.requested = true;
    }
}

/// D / T pick a tool, X stops drawing, Delete clears everything
pub fn handle_overlay_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<OverlayState>,
    mut contexts: EguiContexts,
) {
    // Don't steal keys from the text box
    if wants_keyboard_input(&mut contexts) {
        return;
    }

    match overlay_shortcut(&keyboard, &overlay) {
        Some(OverlayShortcut::Tool(mode)) => activate_tool(&mut overlay, mode),
        Some(OverlayShortcut::Stop) => {
            overlay.set_drawing_enabled(false);
            info!("Annotation drawing stopped");
        }
        Some(OverlayShortcut::ClearAll) => {
            overlay.clear_all();
            info!("Cleared all annotations");
        }
        None => {}
    }
}

pub fn update_cursor_icon(
    overlay: Res<OverlayState>,
    surface: Res<OverlaySurface>,
    window_query: Query<(Entity, &Window), With<PrimaryWindow>>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok((entity, window)) = window_query.single() else {
        return;
    };

    let over_surface = window
        .cursor_position()
        .is_some_and(|pos| surface.contains(pos));

    let icon = if overlay.phase() == OverlayPhase::Idle
        || !over_surface
        || is_cursor_over_ui(&mut contexts)
    {
        SystemCursorIcon::Default
    } else {
        match overlay.tool().mode {
            ToolMode::Draw => SystemCursorIcon::Crosshair,
            ToolMode::Text => SystemCursorIcon::Text,
        }
    };

    commands.entity(entity).insert(CursorIcon::System(icon));
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_MOVES: [Vec2; 0] = [];

    fn enabled(mode: ToolMode) -> OverlayState {
        let mut overlay = OverlayState::default();
        activate_tool(&mut overlay, mode);
        overlay
    }

    fn pressed_keys(keys: &[KeyCode]) -> ButtonInput<KeyCode> {
        let mut keyboard = ButtonInput::default();
        for key in keys {
            keyboard.press(*key);
        }
        keyboard
    }

    #[test]
    fn test_focus_survives_release_of_opening_click() {
        let mut focus = TextInputFocus { requested: true };

        // Press frame: the box grabs focus
        assert!(focus.should_request(false, false));
        // Release frame: the click lands outside the box
        assert!(focus.should_request(true, true));
        // egui dropped focus after that click; ask again
        assert!(focus.should_request(false, false));
        assert!(focus.requested);
        // Settled
        assert!(!focus.should_request(true, false));
        assert!(!focus.requested);
    }

    #[test]
    fn test_focus_reclaimed_after_settling() {
        let mut focus = TextInputFocus::default();
        assert!(!focus.should_request(true, false));
        assert!(focus.should_request(false, false));
    }

    #[test]
    fn test_typing_into_label_triggers_no_shortcut() {
        let mut overlay = enabled(ToolMode::Text);
        overlay.on_pointer_down(Vec2::new(50.0, 50.0), CanvasTransform::default());

        let keyboard = pressed_keys(&[KeyCode::KeyD]);
        assert_eq!(overlay_shortcut(&keyboard, &overlay), None);
        let keyboard = pressed_keys(&[KeyCode::KeyX]);
        assert_eq!(overlay_shortcut(&keyboard, &overlay), None);
        assert!(overlay.pending_text().is_some());
    }

    #[test]
    fn test_shortcuts_without_pending_text() {
        let overlay = enabled(ToolMode::Draw);
        assert_eq!(
            overlay_shortcut(&pressed_keys(&[KeyCode::KeyT]), &overlay),
            Some(OverlayShortcut::Tool(ToolMode::Text))
        );
        assert_eq!(
            overlay_shortcut(&pressed_keys(&[KeyCode::KeyX]), &overlay),
            Some(OverlayShortcut::Stop)
        );
        // Nothing to clear
        assert_eq!(overlay_shortcut(&pressed_keys(&[KeyCode::Delete]), &overlay), None);
    }

    #[test]
    fn test_delete_clears_in_progress_path() {
        let mut overlay = enabled(ToolMode::Draw);
        overlay.on_pointer_down(Vec2::ZERO, CanvasTransform::default());
        assert_eq!(
            overlay_shortcut(&pressed_keys(&[KeyCode::Delete]), &overlay),
            Some(OverlayShortcut::ClearAll)
        );
    }

    #[test]
    fn test_moves_on_release_frame_finish_the_stroke() {
        let mut overlay = enabled(ToolMode::Draw);
        let transform = CanvasTransform::default();
        let mut buttons = ButtonInput::<MouseButton>::default();

        buttons.press(MouseButton::Left);
        apply_pointer_frame(&mut overlay, &buttons, Some(Vec2::new(10.0, 10.0)), NO_MOVES, transform);

        buttons.clear();
        buttons.release(MouseButton::Left);
        apply_pointer_frame(&mut overlay, &buttons, None, [Vec2::new(20.0, 10.0)], transform);

        assert_eq!(overlay.strokes().len(), 1);
        assert_eq!(
            overlay.strokes()[0].points,
            vec![Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0)]
        );
    }

    #[test]
    fn test_drag_keeps_every_move() {
        let mut overlay = enabled(ToolMode::Draw);
        let transform = CanvasTransform::default();
        let mut buttons = ButtonInput::<MouseButton>::default();

        buttons.press(MouseButton::Left);
        apply_pointer_frame(&mut overlay, &buttons, Some(Vec2::ZERO), [Vec2::splat(-5.0)], transform);

        buttons.clear();
        apply_pointer_frame(&mut overlay, &buttons, None, [Vec2::X, Vec2::ONE], transform);

        buttons.release(MouseButton::Left);
        apply_pointer_frame(&mut overlay, &buttons, None, [Vec2::Y], transform);

        // The move reported with the press frame predates the stroke
        assert_eq!(overlay.strokes()[0].points, vec![Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y]);
    }

    #[test]
    fn test_press_off_canvas_starts_nothing() {
        let mut overlay = enabled(ToolMode::Text);
        let mut buttons = ButtonInput::<MouseButton>::default();
        buttons.press(MouseButton::Left);

        let outcome = apply_pointer_frame(&mut overlay, &buttons, None, NO_MOVES, CanvasTransform::default());
        assert_eq!(outcome, PointerOutcome::Ignored);
        assert!(overlay.pending_text().is_none());
    }

    #[test]
    fn test_text_press_asks_for_focus() {
        let mut overlay = enabled(ToolMode::Text);
        let mut buttons = ButtonInput::<MouseButton>::default();
        buttons.press(MouseButton::Left);

        let outcome = apply_pointer_frame(
            &mut overlay,
            &buttons,
            Some(Vec2::new(50.0, 50.0)),
            NO_MOVES,
            CanvasTransform::default(),
        );
        assert_eq!(outcome, PointerOutcome::FocusTextInput);
    }
}
