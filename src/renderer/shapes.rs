//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering an axis-aligned rectangle, in pixel space
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    quad(Vec2::new(rect.x, rect.y), Vec2::new(rect.w, rect.h), color)
}

/// Two triangles covering `size` starting at top-left `min`
pub fn quad(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}
