//! The screen rectangle the overlay covers.

use bevy::prelude::*;
use bevy_egui::egui;

use super::transform::CanvasTransform;

/// Refreshed every UI pass from the region egui leaves free after laying out
/// its panels. `None` until the first pass has run.
#[derive(Resource, Default, Debug)]
pub struct OverlaySurface {
    pub rect: Option<Rect>,
}

impl OverlaySurface {
    pub fn update_from_egui(&mut self, rect: egui::Rect) {
        self.rect = Some(Rect::new(rect.min.x, rect.min.y, rect.max.x, rect.max.y));
    }

    /// Transform for the surface as it is laid out right now
    pub fn transform(&self) -> CanvasTransform {
        self.rect
            .map(|rect| CanvasTransform::from_origin(rect.min))
            .unwrap_or_default()
    }

    pub fn contains(&self, screen: Vec2) -> bool {
        self.rect.is_some_and(|rect| rect.contains(screen))
    }

    pub fn center(&self) -> Option<Vec2> {
        self.rect.map(|rect| rect.center())
    }

    pub fn egui_rect(&self) -> Option<egui::Rect> {
        self.rect.map(|rect| {
            egui::Rect::from_min_max(
                egui::pos2(rect.min.x, rect.min.y),
                egui::pos2(rect.max.x, rect.max.y),
            )
        })
    }
}
