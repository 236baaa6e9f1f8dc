//! Axis-aligned rectangles and the landing test

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen pixels (top-left origin, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Whether `body` is horizontally over this rectangle with its feet inside
    /// the landing band: strictly below the top edge and less than
    /// `tolerance` past the bottom edge.
    pub fn landing_overlap(&self, body: &Rect, tolerance: f32) -> bool {
        body.left() < self.right()
            && body.right() > self.left()
            && body.bottom() > self.top()
            && body.bottom() < self.bottom() + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_band() {
        let platform = Rect::new(200.0, 250.0, 100.0, 20.0);

        // Feet just below the top edge
        assert!(platform.landing_overlap(&Rect::new(210.0, 221.0, 30.0, 30.0), 20.0));
        // Feet exactly on the top edge is not inside the band
        assert!(!platform.landing_overlap(&Rect::new(210.0, 220.0, 30.0, 30.0), 20.0));
        // Feet 39 px below the top (h + tolerance = 40) still lands
        assert!(platform.landing_overlap(&Rect::new(210.0, 259.0, 30.0, 30.0), 20.0));
        assert!(!platform.landing_overlap(&Rect::new(210.0, 260.0, 30.0, 30.0), 20.0));
    }

    #[test]
    fn test_landing_requires_horizontal_overlap() {
        let platform = Rect::new(200.0, 250.0, 100.0, 20.0);
        assert!(!platform.landing_overlap(&Rect::new(170.0, 230.0, 30.0, 30.0), 20.0));
        assert!(!platform.landing_overlap(&Rect::new(300.0, 230.0, 30.0, 30.0), 20.0));
        assert!(platform.landing_overlap(&Rect::new(171.0, 230.0, 30.0, 30.0), 20.0));
    }
}
