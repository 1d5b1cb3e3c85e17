//! Axis-aligned rectangle geometry
//!
//! The shared foundation for every positioned entity. Collision code never
//! compares raw coordinates; everything goes through the bounding box so the
//! predicates stay uniform across entity types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A positioned axis-aligned rectangle
///
/// Size is fixed at construction; entities move by mutating `pos`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Edge coordinates derived from the current position
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            left: self.pos.x,
            right: self.pos.x + self.size.x,
            top: self.pos.y,
            bottom: self.pos.y + self.size.y,
        }
    }
}

/// Edge coordinates of a rectangle at one moment in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BoundingBox {
    /// Strict AABB overlap: boxes that merely touch do not overlap
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounding_box_matches_position_and_size() {
        let b = Rect::new(20.0, 30.0, 5.0, 5.0).bounding_box();
        assert_eq!(b.left, 20.0);
        assert_eq!(b.right, 25.0);
        assert_eq!(b.top, 30.0);
        assert_eq!(b.bottom, 35.0);
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        // Ball's right edge exactly on the paddle's left edge
        let ball = Rect::new(5.0, 10.0, 5.0, 5.0).bounding_box();
        let paddle = Rect::new(10.0, 10.0, 5.0, 20.0).bounding_box();
        assert!(!ball.overlaps(&paddle));
        assert!(!paddle.overlaps(&ball));
    }

    #[test]
    fn overlapping_boxes_overlap() {
        let ball = Rect::new(6.0, 12.0, 5.0, 5.0).bounding_box();
        let paddle = Rect::new(10.0, 10.0, 5.0, 20.0).bounding_box();
        assert!(ball.overlaps(&paddle));
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 5.0, 5.0).bounding_box();
        let b = Rect::new(50.0, 50.0, 5.0, 20.0).bounding_box();
        assert!(!a.overlaps(&b));
    }

    proptest! {
        #[test]
        fn box_edges_are_ordered(
            x in -1e3f32..1e3,
            y in -1e3f32..1e3,
            w in 0.1f32..1e3,
            h in 0.1f32..1e3,
        ) {
            let b = Rect::new(x, y, w, h).bounding_box();
            prop_assert!(b.left < b.right);
            prop_assert!(b.top < b.bottom);
            prop_assert_eq!(b.left, x);
            prop_assert_eq!(b.right, x + w);
            prop_assert_eq!(b.top, y);
            prop_assert_eq!(b.bottom, y + h);
        }

        #[test]
        fn overlap_is_symmetric(
            ax in -100f32..100.0,
            ay in -100f32..100.0,
            bx in -100f32..100.0,
            by in -100f32..100.0,
        ) {
            let a = Rect::new(ax, ay, 5.0, 5.0).bounding_box();
            let b = Rect::new(bx, by, 5.0, 20.0).bounding_box();
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
