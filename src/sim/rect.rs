//! Axis-aligned rectangle geometry
//!
//! Every entity in the arena is an AABB: a top-left corner plus an extent,
//! with y growing downward (screen coordinates). Overlap is strict on all
//! four edges, so rectangles that merely touch do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict AABB overlap test. Edge-adjacent rectangles do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether the rectangle lies fully inside `[0, bounds]`, edges included.
    /// This is the bounce/containment test used by hazards and push checks.
    #[inline]
    pub fn within(&self, bounds: Vec2) -> bool {
        self.pos.x >= 0.0
            && self.pos.y >= 0.0
            && self.pos.x <= bounds.x - self.size.x
            && self.pos.y <= bounds.y - self.size.y
    }

    /// The same rectangle shifted by `delta`
    #[inline]
    pub fn translated(&self, delta: Vec2) -> Rect {
        Rect {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// True if the rectangle overlaps any rectangle in `others`
    pub fn overlaps_any<'a, I>(&self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        others.into_iter().any(|r| self.overlaps(r))
    }
}
