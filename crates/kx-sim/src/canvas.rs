//! Drawing surface abstraction.
//!
//! Models draw in simulation coordinates against the [`Canvas`] trait;
//! the surface implementation owns the pixel mapping via
//! [`ScreenTransform`]. The transform is constructed once per run and
//! passed by reference, never held in a process-wide global.

use kx_core::Real;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Abstract rendering target consumed by a model's `draw`.
///
/// All coordinates are simulation coordinates; the implementation applies
/// the screen transform.
pub trait Canvas {
    fn draw_point(&mut self, at: Vector2<Real>);
    fn draw_line(&mut self, from: Vector2<Real>, to: Vector2<Real>);
    fn draw_text(&mut self, at: Vector2<Real>, text: &str);

    /// Absolute simulation-coordinate span currently visible, for models
    /// that fill the view (gridlines, axes).
    fn coord_range(&self) -> Vector2<Real> {
        Vector2::new(10.0, 10.0)
    }
}

/// Simulation-to-pixel mapping.
///
/// `pixel = screen_size/2 + (coord - center) * (screen_size / scale)`.
/// The y component of `coord_scale` is conventionally negative so that
/// simulation "up" maps to screen "up".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenTransform {
    /// Surface size in pixels.
    pub screen_size: Vector2<Real>,
    /// Simulation-coordinate span across the full surface.
    pub coord_scale: Vector2<Real>,
    /// Simulation coordinate at the center of the surface.
    pub coord_center: Vector2<Real>,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self {
            screen_size: Vector2::new(500.0, 500.0),
            coord_scale: Vector2::new(10.0, -10.0),
            coord_center: Vector2::new(0.0, 0.0),
        }
    }
}

impl ScreenTransform {
    pub fn to_pixels(&self, coord: Vector2<Real>) -> Vector2<Real> {
        self.screen_size * 0.5
            + (coord - self.coord_center).component_mul(&self.screen_size.component_div(&self.coord_scale))
    }

    /// Absolute simulation-coordinate range visible on the surface.
    pub fn coord_range(&self) -> Vector2<Real> {
        self.coord_scale.abs()
    }
}

/// Surface that discards everything; used by headless runs.
#[derive(Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn draw_point(&mut self, _at: Vector2<Real>) {}
    fn draw_line(&mut self, _from: Vector2<Real>, _to: Vector2<Real>) {}
    fn draw_text(&mut self, _at: Vector2<Real>, _text: &str) {}
}

/// Primitive recorded by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Point(Vector2<Real>),
    Line(Vector2<Real>, Vector2<Real>),
    Text(Vector2<Real>, String),
}

/// Surface that records every primitive, for tests.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub primitives: Vec<Primitive>,
}

impl Canvas for RecordingCanvas {
    fn draw_point(&mut self, at: Vector2<Real>) {
        self.primitives.push(Primitive::Point(at));
    }

    fn draw_line(&mut self, from: Vector2<Real>, to: Vector2<Real>) {
        self.primitives.push(Primitive::Line(from, to));
    }

    fn draw_text(&mut self, at: Vector2<Real>, text: &str) {
        self.primitives.push(Primitive::Text(at, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_view_maps_to_center_of_screen() {
        let tf = ScreenTransform::default();
        let px = tf.to_pixels(Vector2::new(0.0, 0.0));
        assert_eq!(px, Vector2::new(250.0, 250.0));
    }

    #[test]
    fn y_axis_is_flipped_by_negative_scale() {
        let tf = ScreenTransform::default();
        let up = tf.to_pixels(Vector2::new(0.0, 1.0));
        // Simulation +y maps above screen center (smaller pixel y)
        assert!(up.y < 250.0);
        assert_eq!(up.x, 250.0);
    }

    #[test]
    fn off_center_view_shifts_the_mapping() {
        let tf = ScreenTransform {
            coord_center: Vector2::new(2.0, 0.0),
            ..Default::default()
        };
        let px = tf.to_pixels(Vector2::new(2.0, 0.0));
        assert_eq!(px, Vector2::new(250.0, 250.0));
    }

    #[test]
    fn recording_canvas_keeps_order() {
        let mut canvas = RecordingCanvas::default();
        canvas.draw_point(Vector2::new(1.0, 2.0));
        canvas.draw_text(Vector2::new(0.0, 0.0), "t=0");
        assert_eq!(canvas.primitives.len(), 2);
        assert!(matches!(canvas.primitives[0], Primitive::Point(_)));
    }
}
