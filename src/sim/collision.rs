//! Collision detection for the rectangular arena
//!
//! Detection only: these functions look at bounding boxes and report what
//! touched what. Responses (bounces, scoring, resets) are applied by the
//! entity methods in `state`.

use super::rect::{BoundingBox, Rect};
use super::state::Arena;

/// Ball/paddle contact, carrying the ball's vertical protrusion past each
/// paddle edge
///
/// A negative distance means the ball sticks out past that edge of the
/// paddle. At most one distance is negative for a real contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    pub distance_from_top: f32,
    pub distance_from_bottom: f32,
}

/// Check the ball's box against a paddle's box
///
/// Overlap must be strict; a ball that exactly grazes a paddle edge passes by.
pub fn paddle_contact(ball: &Rect, paddle: &Rect) -> Option<PaddleContact> {
    let ball_box = ball.bounding_box();
    let paddle_box = paddle.bounding_box();

    if !ball_box.overlaps(&paddle_box) {
        return None;
    }

    Some(PaddleContact {
        distance_from_top: ball_box.top - paddle_box.top,
        distance_from_bottom: paddle_box.bottom - ball_box.bottom,
    })
}

/// What the ball's box touched on the arena boundary
///
/// All three conditions are evaluated independently against the same box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Ball left the arena through the left wall
    pub exit_left: bool,
    /// Ball left the arena through the right wall
    pub exit_right: bool,
    /// Ball touched the top or bottom wall
    pub vertical_bounce: bool,
}

pub fn wall_contact(ball: &BoundingBox, arena: &Arena) -> WallContact {
    WallContact {
        exit_left: ball.left < 0.0,
        exit_right: ball.right > arena.width,
        vertical_bounce: ball.top < 0.0 || ball.bottom > arena.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(80.0, 48.0)
    }

    #[test]
    fn separated_boxes_make_no_contact() {
        let ball = Rect::new(40.0, 20.0, 5.0, 5.0);
        let paddle = Rect::new(10.0, 10.0, 5.0, 20.0);
        assert_eq!(paddle_contact(&ball, &paddle), None);
    }

    #[test]
    fn edge_touch_is_not_contact() {
        // ball.right == paddle.left exactly
        let ball = Rect::new(5.0, 15.0, 5.0, 5.0);
        let paddle = Rect::new(10.0, 10.0, 5.0, 20.0);
        assert_eq!(paddle_contact(&ball, &paddle), None);
    }

    #[test]
    fn overlap_reports_protrusion_distances() {
        let ball = Rect::new(8.0, 12.0, 5.0, 5.0);
        let paddle = Rect::new(10.0, 10.0, 5.0, 20.0);

        let contact = paddle_contact(&ball, &paddle).unwrap();
        // ball.top (12) - paddle.top (10)
        assert_eq!(contact.distance_from_top, 2.0);
        // paddle.bottom (30) - ball.bottom (17)
        assert_eq!(contact.distance_from_bottom, 13.0);
    }

    #[test]
    fn ball_past_paddle_top_has_negative_top_distance() {
        let ball = Rect::new(8.0, 7.0, 5.0, 5.0);
        let paddle = Rect::new(10.0, 10.0, 5.0, 20.0);

        let contact = paddle_contact(&ball, &paddle).unwrap();
        assert!(contact.distance_from_top < 0.0);
        assert!(contact.distance_from_bottom > 0.0);
    }

    #[test]
    fn ball_inside_arena_touches_nothing() {
        let b = Rect::new(40.0, 20.0, 5.0, 5.0).bounding_box();
        assert_eq!(wall_contact(&b, &arena()), WallContact::default());
    }

    #[test]
    fn left_exit_is_reported() {
        let b = Rect::new(-2.0, 20.0, 5.0, 5.0).bounding_box();
        let contact = wall_contact(&b, &arena());
        assert!(contact.exit_left);
        assert!(!contact.exit_right);
        assert!(!contact.vertical_bounce);
    }

    #[test]
    fn right_exit_is_reported() {
        let b = Rect::new(78.0, 20.0, 5.0, 5.0).bounding_box();
        let contact = wall_contact(&b, &arena());
        assert!(contact.exit_right);
        assert!(!contact.exit_left);
    }

    #[test]
    fn top_and_bottom_walls_report_a_vertical_bounce() {
        let top = Rect::new(40.0, -1.0, 5.0, 5.0).bounding_box();
        assert!(wall_contact(&top, &arena()).vertical_bounce);

        let bottom = Rect::new(40.0, 44.5, 5.0, 5.0).bounding_box();
        assert!(wall_contact(&bottom, &arena()).vertical_bounce);
    }

    #[test]
    fn corner_exit_reports_both_conditions() {
        // Out the left wall while also above the top wall
        let b = Rect::new(-2.0, -1.0, 5.0, 5.0).bounding_box();
        let contact = wall_contact(&b, &arena());
        assert!(contact.exit_left);
        assert!(contact.vertical_bounce);
    }
}
