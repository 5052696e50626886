//! `kx_sim::Canvas` implemented over an egui painter.

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};
use kx_core::Real;
use kx_sim::{Canvas, ScreenTransform};
use nalgebra::Vector2;

pub struct PaintCanvas<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
    transform: ScreenTransform,
}

impl<'a> PaintCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: Rect) -> Self {
        let transform = ScreenTransform {
            screen_size: Vector2::new(rect.width() as Real, rect.height() as Real),
            ..Default::default()
        };
        Self {
            painter,
            rect,
            transform,
        }
    }

    fn to_pos(&self, at: Vector2<Real>) -> Pos2 {
        let px = self.transform.to_pixels(at);
        Pos2::new(self.rect.min.x + px.x as f32, self.rect.min.y + px.y as f32)
    }
}

impl Canvas for PaintCanvas<'_> {
    fn draw_point(&mut self, at: Vector2<Real>) {
        self.painter.circle_filled(self.to_pos(at), 5.0, Color32::BLACK);
    }

    fn draw_line(&mut self, from: Vector2<Real>, to: Vector2<Real>) {
        self.painter.line_segment(
            [self.to_pos(from), self.to_pos(to)],
            Stroke::new(1.0, Color32::from_gray(150)),
        );
    }

    fn draw_text(&mut self, at: Vector2<Real>, text: &str) {
        self.painter.text(
            self.to_pos(at),
            Align2::LEFT_TOP,
            text,
            FontId::monospace(14.0),
            Color32::BLACK,
        );
    }

    fn coord_range(&self) -> Vector2<Real> {
        self.transform.coord_range()
    }
}
