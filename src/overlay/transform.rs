//! Screen-space to canvas-space conversion for the overlay surface.

use bevy::prelude::*;

/// Affine mapping from window (logical pixel) coordinates into the overlay's
/// local canvas. Built fresh from the surface rectangle for every pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Screen position of the canvas origin (the surface's top-left corner)
    pub origin: Vec2,
    /// Screen pixels per canvas unit
    pub scale: f32,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl CanvasTransform {
    pub fn new(origin: Vec2, scale: f32) -> Self {
        Self {
            origin,
            scale: if scale > f32::EPSILON { scale } else { 1.0 },
        }
    }

    /// Transform for a surface whose top-left corner sits at `origin`, unscaled.
    pub fn from_origin(origin: Vec2) -> Self {
        Self::new(origin, 1.0)
    }

    pub fn to_canvas(&self, screen: Vec2) -> Vec2 {
        (screen - self.origin) / self.scale
    }

    pub fn to_screen(&self, canvas: Vec2) -> Vec2 {
        canvas * self.scale + self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let transform = CanvasTransform::default();
        let p = Vec2::new(12.5, -3.0);
        assert_eq!(transform.to_canvas(p), p);
        assert_eq!(transform.to_screen(p), p);
    }

    #[test]
    fn test_origin_is_subtracted() {
        let transform = CanvasTransform::from_origin(Vec2::new(100.0, 40.0));
        assert_eq!(
            transform.to_canvas(Vec2::new(110.0, 50.0)),
            Vec2::new(10.0, 10.0)
        );
    }

    #[test]
    fn test_scale_divides_offset() {
        let transform = CanvasTransform::new(Vec2::new(10.0, 10.0), 2.0);
        assert_eq!(
            transform.to_canvas(Vec2::new(30.0, 50.0)),
            Vec2::new(10.0, 20.0)
        );
    }

    #[test]
    fn test_to_screen_inverts_to_canvas() {
        let transform = CanvasTransform::new(Vec2::new(-25.0, 80.0), 1.5);
        let screen = Vec2::new(300.0, 120.0);
        let back = transform.to_screen(transform.to_canvas(screen));
        assert!((back - screen).length() < 1e-4);
    }

    #[test]
    fn test_zero_scale_falls_back_to_unit() {
        let transform = CanvasTransform::new(Vec2::ZERO, 0.0);
        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn test_moving_surface_changes_canvas_point() {
        // Same screen point, surface shifted right by 50: canvas x shrinks by 50
        let screen = Vec2::new(200.0, 200.0);
        let before = CanvasTransform::from_origin(Vec2::new(0.0, 100.0));
        let after = CanvasTransform::from_origin(Vec2::new(50.0, 100.0));
        assert_eq!(before.to_canvas(screen).x - after.to_canvas(screen).x, 50.0);
    }
}
