//! Paints the overlay scene onto an egui foreground layer.
//!
//! The layer is a bare painter, not an `Area`, so egui never treats the
//! finished annotations as something the pointer can hover or click.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::STROKE_WIDTH;
use crate::theme::bevy_to_egui;

use super::scene::{build_scene, SceneItem};
use super::state::OverlayState;
use super::surface::OverlaySurface;
use super::transform::CanvasTransform;

pub fn render_overlay(
    mut contexts: EguiContexts,
    overlay: Res<OverlayState>,
    surface: Res<OverlaySurface>,
) -> Result {
    let Some(clip_rect) = surface.egui_rect() else {
        return Ok(());
    };

    let ctx = contexts.ctx_mut()?;
    let painter = ctx
        .layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("annotation_overlay"),
        ))
        .with_clip_rect(clip_rect);

    let transform = surface.transform();
    for item in build_scene(&overlay) {
        match item {
            SceneItem::Stroke { points, color } | SceneItem::LivePath { points, color } => {
                painter.add(egui::Shape::line(
                    to_screen_points(&transform, &points),
                    egui::Stroke::new(STROKE_WIDTH, bevy_to_egui(color)),
                ));
            }
            SceneItem::TextLine {
                text,
                position,
                color,
                font_size,
            } => {
                let pos = transform.to_screen(position);
                // Anchor sits on the first line's baseline
                painter.text(
                    egui::pos2(pos.x, pos.y),
                    egui::Align2::LEFT_BOTTOM,
                    text,
                    egui::FontId::proportional(font_size),
                    bevy_to_egui(color),
                );
            }
        }
    }

    Ok(())
}

fn to_screen_points(transform: &CanvasTransform, points: &[Vec2]) -> Vec<egui::Pos2> {
    points
        .iter()
        .map(|p| {
            let screen = transform.to_screen(*p);
            egui::pos2(screen.x, screen.y)
        })
        .collect()
}
