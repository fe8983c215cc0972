//! Ordered render list produced from the overlay state.

use bevy::prelude::*;

use super::state::{OverlayState, ToolMode};
use super::wrap::layout_label;

/// One drawable item, in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItem {
    /// A finalized stroke
    Stroke { points: Vec<Vec2>, color: Color },
    /// The path currently being drawn
    LivePath { points: Vec<Vec2>, color: Color },
    /// One wrapped line of a text label
    TextLine {
        text: String,
        position: Vec2,
        color: Color,
        font_size: f32,
    },
}

/// Strokes first, then the live path, then every label line.
pub fn build_scene(state: &OverlayState) -> Vec<SceneItem> {
    let mut items: Vec<SceneItem> = state
        .strokes()
        .iter()
        .map(|stroke| SceneItem::Stroke {
            points: stroke.points.clone(),
            color: stroke.color,
        })
        .collect();

    if state.tool().mode == ToolMode::Draw
        && let Some(path) = state.in_progress_path()
        && !path.points.is_empty()
    {
        items.push(SceneItem::LivePath {
            points: path.points.clone(),
            color: state.tool().color,
        });
    }

    for label in state.labels() {
        for (text, offset) in layout_label(&label.content, label.font_size) {
            items.push(SceneItem::TextLine {
                text,
                position: label.anchor + offset,
                color: label.color,
                font_size: label.font_size,
            });
        }
    }

    items
}
