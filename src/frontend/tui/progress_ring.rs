//! Circular countdown dial drawn on a braille canvas.
//!
//! A dim full-circle track sits underneath an accent arc that starts at
//! 12 o'clock and sweeps clockwise over the remaining share of the countdown.

use crate::widgets::RingGeometry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Widget,
    },
};

/// Arc of a circle, clockwise from the top.
struct Arc {
    center: (f64, f64),
    geometry: RingGeometry,
    sweep_degrees: f64,
    color: Color,
}

impl Shape for Arc {
    fn draw(&self, painter: &mut Painter) {
        if self.sweep_degrees <= 0.0 || self.geometry.radius <= 0.0 {
            return;
        }
        // Four samples per degree keeps the braille stroke unbroken at
        // terminal-sized radii.
        let steps = (self.sweep_degrees * 4.0).ceil() as usize;
        for i in 0..=steps {
            let degrees = self.sweep_degrees * i as f64 / steps as f64;
            let (x, y) = self.geometry.point_at(self.center, degrees);
            if let Some((px, py)) = painter.get_point(x, y) {
                painter.paint(px, py, self.color);
            }
        }
    }
}

/// Progress ring for the countdown view
pub struct ProgressRing {
    fraction: f64,
    fill: Color,
    track: Color,
}

impl ProgressRing {
    /// `fraction` is the remaining share: 1.0 draws a full circle, 0.0 none.
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
            fill: Color::Rgb(0, 242, 255),
            track: Color::DarkGray,
        }
    }

    pub fn set_colors(&mut self, fill: Color, track: Color) {
        self.fill = fill;
        self.track = track;
    }

    /// Ring geometry for an area, in canvas units where one unit is one
    /// column wide and half a row tall, so the circle comes out round.
    pub fn geometry_for(area: Rect) -> ((f64, f64), RingGeometry) {
        let width = area.width as f64;
        let height = area.height as f64 * 2.0;
        let center = (width / 2.0, height / 2.0);
        let radius = (width.min(height) / 2.0 - 0.5).max(0.0);
        (center, RingGeometry::new(radius))
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 2 {
            return;
        }

        let (center, geometry) = Self::geometry_for(area);
        let sweep = geometry.sweep_degrees(self.fraction);
        let track = Arc {
            center,
            geometry,
            sweep_degrees: 360.0,
            color: self.track,
        };
        let arc = Arc {
            center,
            geometry,
            sweep_degrees: sweep,
            color: self.fill,
        };

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, area.width as f64])
            .y_bounds([0.0, area.height as f64 * 2.0])
            .paint(|ctx| {
                ctx.draw(&track);
                ctx.layer();
                ctx.draw(&arc);
            })
            .render(area, buf);
    }
}
