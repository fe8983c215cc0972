//! Finalized annotation types.

use bevy::prelude::*;

/// Identifier handed out by [`super::OverlayState`] when an annotation is finalized.
pub type AnnotationId = u64;

/// A finished freehand line in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub id: AnnotationId,
    pub points: Vec<Vec2>,
    pub color: Color,
}

/// A finished text annotation anchored in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub id: AnnotationId,
    pub anchor: Vec2,
    pub content: String,
    pub color: Color,
    pub font_size: f32,
}
