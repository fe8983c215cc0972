//! Overlay state machine: tool settings, capture buffers and finalized annotations.
//!
//! Every handler is a synchronous transition over [`OverlayState`]. Inputs that
//! do not apply in the current state are silently ignored, so none of these
//! operations can fail.

use bevy::prelude::*;

use crate::constants::{DEFAULT_FONT_SIZE, MIN_STROKE_POINTS};
use crate::theme;

use super::components::{AnnotationId, Stroke, TextLabel};
use super::transform::CanvasTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Draw,
    Text,
}

impl ToolMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolMode::Draw => "Draw (D)",
            ToolMode::Text => "Add Text (T)",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            ToolMode::Draw => "Click and drag to draw",
            ToolMode::Text => "Click anywhere to add text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    pub mode: ToolMode,
    pub color: Color,
    pub font_size: f32,
    /// Master switch; when off the overlay lets every pointer event through
    pub enabled: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            mode: ToolMode::Draw,
            color: theme::ANNOTATION_DEFAULT,
            font_size: DEFAULT_FONT_SIZE,
            enabled: false,
        }
    }
}

/// Points collected between pointer-down and pointer-up in draw mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InProgressPath {
    pub points: Vec<Vec2>,
}

/// Text being typed before it is committed as a [`TextLabel`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingText {
    pub content: String,
    pub canvas_anchor: Vec2,
    /// Where the pointer went down on screen, used to place the input box
    pub screen_anchor: Vec2,
}

/// The single entity being captured, if any. Being an enum, a path and a
/// pending text can never coexist.
#[derive(Debug, Clone, Default, PartialEq)]
enum Capture {
    #[default]
    None,
    Path(InProgressPath),
    Text(PendingText),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Drawing disabled
    Idle,
    /// Enabled with nothing being captured
    Ready,
    /// A path or a pending text is active
    Capturing,
}

/// What the host should do after a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Ignored,
    Consumed,
    /// A text entry was opened; the host should focus its input field
    FocusTextInput,
}

#[derive(Resource, Debug, Default)]
pub struct OverlayState {
    tool: ToolState,
    strokes: Vec<Stroke>,
    labels: Vec<TextLabel>,
    capture: Capture,
    next_id: AnnotationId,
}

impl OverlayState {
    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    pub fn in_progress_path(&self) -> Option<&InProgressPath> {
        match &self.capture {
            Capture::Path(path) => Some(path),
            _ => None,
        }
    }

    pub fn pending_text(&self) -> Option<&PendingText> {
        match &self.capture {
            Capture::Text(pending) => Some(pending),
            _ => None,
        }
    }

    /// Mutable access for the text input widget
    pub fn pending_text_mut(&mut self) -> Option<&mut PendingText> {
        match &mut self.capture {
            Capture::Text(pending) => Some(pending),
            _ => None,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        if !self.tool.enabled {
            OverlayPhase::Idle
        } else if matches!(self.capture, Capture::None) {
            OverlayPhase::Ready
        } else {
            OverlayPhase::Capturing
        }
    }

    /// Nothing finalized and nothing being captured, so Clear All has no work
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.labels.is_empty() && matches!(self.capture, Capture::None)
    }

    // ------------------------------------------------------------------------
    // Tool settings
    // ------------------------------------------------------------------------

    /// Switch between draw and text mode. Anything being captured is dropped.
    pub fn set_tool_mode(&mut self, mode: ToolMode) {
        self.capture = Capture::None;
        self.tool.mode = mode;
    }

    /// Turn the overlay on or off. Turning it off discards the in-progress
    /// path or pending text without finalizing either.
    pub fn set_drawing_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.capture = Capture::None;
        }
        self.tool.enabled = enabled;
    }

    pub fn set_color(&mut self, color: Color) {
        self.tool.color = color;
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.tool.font_size = font_size;
    }

    // ------------------------------------------------------------------------
    // Pointer handlers
    // ------------------------------------------------------------------------

    pub fn on_pointer_down(&mut self, screen: Vec2, transform: CanvasTransform) -> PointerOutcome {
        if !self.tool.enabled {
            return PointerOutcome::Ignored;
        }

        let canvas = transform.to_canvas(screen);
        match self.tool.mode {
            ToolMode::Draw => {
                self.capture = Capture::Path(InProgressPath {
                    points: vec![canvas],
                });
                PointerOutcome::Consumed
            }
            ToolMode::Text => {
                // Keep whatever was typed at the previous spot before moving on
                if let Capture::Text(previous) = std::mem::take(&mut self.capture) {
                    self.push_label(&previous);
                }
                self.capture = Capture::Text(PendingText {
                    content: String::new(),
                    canvas_anchor: canvas,
                    screen_anchor: screen,
                });
                PointerOutcome::FocusTextInput
            }
        }
    }

    pub fn on_pointer_move(&mut self, screen: Vec2, transform: CanvasTransform) -> PointerOutcome {
        if !self.tool.enabled || self.tool.mode != ToolMode::Draw {
            return PointerOutcome::Ignored;
        }

        match &mut self.capture {
            Capture::Path(path) => {
                path.points.push(transform.to_canvas(screen));
                PointerOutcome::Consumed
            }
            _ => PointerOutcome::Ignored,
        }
    }

    /// Finalize the in-progress path if it has enough points. The path is
    /// cleared either way; a pending text is left alone.
    pub fn on_pointer_up(&mut self) -> Option<AnnotationId> {
        if !matches!(self.capture, Capture::Path(_)) {
            return None;
        }

        let Capture::Path(path) = std::mem::take(&mut self.capture) else {
            return None;
        };

        if self.tool.mode != ToolMode::Draw || path.points.len() < MIN_STROKE_POINTS {
            return None;
        }

        let id = self.allocate_id();
        debug!("Finalized stroke {} with {} points", id, path.points.len());
        self.strokes.push(Stroke {
            id,
            points: path.points,
            color: self.tool.color,
        });
        Some(id)
    }

    // ------------------------------------------------------------------------
    // Text entry
    // ------------------------------------------------------------------------

    /// Commit the pending text (Enter). Blank input is dropped; the pending
    /// entry is closed in both cases.
    pub fn commit_pending_text(&mut self) -> Option<AnnotationId> {
        if !matches!(self.capture, Capture::Text(_)) {
            return None;
        }

        let Capture::Text(pending) = std::mem::take(&mut self.capture) else {
            return None;
        };
        self.push_label(&pending)
    }

    /// Drop the pending text (Escape).
    pub fn cancel_pending_text(&mut self) {
        if matches!(self.capture, Capture::Text(_)) {
            self.capture = Capture::None;
        }
    }

    /// Remove every annotation and abandon anything in progress.
    pub fn clear_all(&mut self) {
        self.strokes.clear();
        self.labels.clear();
        self.capture = Capture::None;
    }

    fn push_label(&mut self, pending: &PendingText) -> Option<AnnotationId> {
        let content = pending.content.trim();
        if content.is_empty() {
            return None;
        }

        let id = self.allocate_id();
        debug!("Finalized text label {} at {:?}", id, pending.canvas_anchor);
        self.labels.push(TextLabel {
            id,
            anchor: pending.canvas_anchor,
            content: content.to_string(),
            color: self.tool.color,
            font_size: self.tool.font_size,
        });
        Some(id)
    }

    fn allocate_id(&mut self) -> AnnotationId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
