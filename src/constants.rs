//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

// ============================================================================
// Annotation Overlay
// ============================================================================

/// A freehand path needs at least this many points to become a stroke
pub const MIN_STROKE_POINTS: usize = 2;

/// Width of freehand strokes in screen pixels
pub const STROKE_WIDTH: f32 = 3.0;

/// Words per line when wrapping text labels
pub const LABEL_WORDS_PER_LINE: usize = 5;

/// Line spacing for wrapped labels, as a multiple of the font size
pub const LABEL_LINE_HEIGHT: f32 = 1.2;

/// Default label font size in points
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Allowed range for label font sizes loaded from config
pub const MIN_FONT_SIZE: f32 = 8.0;
pub const MAX_FONT_SIZE: f32 = 72.0;

/// Font size choices offered in the toolbar
pub const FONT_SIZE_OPTIONS: [(f32, &str); 4] = [
    (14.0, "Small"),
    (16.0, "Medium"),
    (20.0, "Large"),
    (24.0, "X-Large"),
];

/// Offset of the text input box from the click position
pub const TEXT_INPUT_OFFSET: f32 = 8.0;

// ============================================================================
// Diagram
// ============================================================================

/// Size of a diagram node box in world units
pub const NODE_WIDTH: f32 = 180.0;
pub const NODE_HEIGHT: f32 = 96.0;

/// Dash pattern for DNS edges
pub const EDGE_DASH_LENGTH: f32 = 10.0;
pub const EDGE_GAP_LENGTH: f32 = 8.0;

/// How fast animated dashes travel along an edge, in world units per second
pub const EDGE_DASH_SPEED: f32 = 30.0;

// ============================================================================
// Intro curtain
// ============================================================================

/// Seconds before the curtain opens by itself
pub const DEFAULT_REVEAL_DELAY_SECS: f32 = 50.0;

/// Curtain opening step (percent) and interval between steps
pub const CURTAIN_STEP_PERCENT: f32 = 5.0;
pub const CURTAIN_STEP_SECS: f32 = 0.03;
