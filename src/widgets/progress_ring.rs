//! Geometry of the countdown's circular progress indicator (rendering-agnostic)
//!
//! The ring is a stroked circle whose dash array equals the circumference.
//! Shifting the dash by `(1 - fraction) * circumference` hides the spent part,
//! leaving an arc that covers `fraction` of the circle.

use std::f64::consts::PI;

/// Radius used by the reference 256px dial.
pub const DEFAULT_RING_RADIUS: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
}

impl RingGeometry {
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Dash offset for a ring showing `fraction` (clamped to 0..=1).
    pub fn dash_offset(&self, fraction: f64) -> f64 {
        self.circumference() * (1.0 - fraction.clamp(0.0, 1.0))
    }

    /// Length of the visible arc at the given dash offset.
    pub fn visible_length(&self, dash_offset: f64) -> f64 {
        (self.circumference() - dash_offset).clamp(0.0, self.circumference())
    }

    /// Swept angle in degrees for a ring showing `fraction`.
    pub fn sweep_degrees(&self, fraction: f64) -> f64 {
        let circumference = self.circumference();
        if circumference <= 0.0 {
            return 0.0;
        }
        360.0 * self.visible_length(self.dash_offset(fraction)) / circumference
    }

    /// Point on the ring at `degrees` clockwise from 12 o'clock, y pointing up.
    pub fn point_at(&self, center: (f64, f64), degrees: f64) -> (f64, f64) {
        let theta = degrees.to_radians();
        (
            center.0 + self.radius * theta.sin(),
            center.1 + self.radius * theta.cos(),
        )
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_RING_RADIUS)
    }
}
