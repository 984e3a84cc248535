//! Axis-aligned bounding-box overlap.
//!
//! All four comparisons are strict: squares that merely share an edge or a
//! corner do not collide.

/// An axis-aligned box in surface coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + w,
            bottom: y + h,
        }
    }
}

/// Strict-inequality overlap test.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.top < b.bottom && b.top < a.bottom && a.left < b.right && b.left < a.right
}
