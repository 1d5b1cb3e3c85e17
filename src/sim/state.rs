//! Match state and entity response operations
//!
//! Everything the renderer projects and the tick advances lives here. All
//! state is plain data with serde derives, so a match can be snapshotted
//! and replayed deterministically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{WallContact, paddle_contact, wall_contact};
use super::rect::{BoundingBox, Rect};
use crate::consts::*;

/// Which player a score or contact belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Fixed playfield dimensions, taken from the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The ball: a square with a velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    /// A ball in serve state
    pub fn new() -> Self {
        let mut ball = Self {
            rect: Rect::new(0.0, 0.0, BALL_SIZE, BALL_SIZE),
            vel: Vec2::ZERO,
        };
        ball.reset();
        ball
    }

    /// Back to the serve point with the serve velocity
    ///
    /// Full reset: any vertical speed accumulated from edge hits is
    /// discarded.
    pub fn reset(&mut self) {
        self.rect.pos = SERVE_POS;
        self.vel = SERVE_VEL;
    }

    /// One Euler step per tick; no sub-stepping
    pub fn advance(&mut self) {
        self.rect.pos += self.vel;
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.rect.bounding_box()
    }

    /// Bend the bounce when the ball protrudes past a paddle edge
    ///
    /// A hit past the paddle's top sends the ball upward, past the bottom
    /// downward. At most one branch applies per contact.
    pub fn adjust_angle(&mut self, distance_from_top: f32, distance_from_bottom: f32) {
        if distance_from_top < 0.0 {
            self.vel.y -= EDGE_SPIN;
        } else if distance_from_bottom < 0.0 {
            self.vel.y += EDGE_SPIN;
        }
    }

    /// Bounce off a paddle if the boxes strictly overlap
    ///
    /// The caller supplies the post-bounce horizontal speed: sign away from
    /// the paddle, magnitude preserved. Keeping that choice in the
    /// orchestrator avoids duplicating the sign logic per paddle.
    pub fn check_paddle_collision(&mut self, paddle: &Paddle, vx_after_bounce: f32) -> bool {
        match paddle_contact(&self.rect, &paddle.rect) {
            Some(contact) => {
                self.adjust_angle(contact.distance_from_top, contact.distance_from_bottom);
                self.vel.x = vx_after_bounce;
                true
            }
            None => false,
        }
    }

    /// Score exits and top/bottom bounces, all judged against the box
    /// captured before any reset
    ///
    /// An exit awards the opposite side and re-serves. A corner exit also
    /// flips the fresh serve's vertical speed, matching the capture-once
    /// ordering of the original game.
    pub fn check_wall_collision(&mut self, arena: &Arena, scores: &mut Scoreboard) -> WallContact {
        let contact = wall_contact(&self.bounding_box(), arena);

        if contact.exit_left {
            scores.award(Side::Right);
            self.reset();
        }
        if contact.exit_right {
            scores.award(Side::Left);
            self.reset();
        }
        if contact.vertical_bounce {
            self.vel.y = -self.vel.y;
        }

        contact
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// A paddle: fixed x, externally driven y
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.rect.bounding_box()
    }

    /// Jump to an absolute vertical position (pointer input, no clamping)
    pub fn set_y(&mut self, y: f32) {
        self.rect.pos.y = y;
    }

    /// Nudge vertically (opponent controller steps)
    pub fn move_by(&mut self, dy: f32) {
        self.rect.pos.y += dy;
    }
}

/// Two increment-only counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// The winning side, once a counter reaches the target score
    pub fn winner(&self) -> Option<Side> {
        if self.left >= WIN_SCORE {
            Some(Side::Left)
        } else if self.right >= WIN_SCORE {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Match ended; terminal, never left
    Over,
}

/// Complete match state (deterministic, serializable)
///
/// Owns every entity for the lifetime of one match. One match per value;
/// a rematch is a fresh `MatchState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub arena: Arena,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub scores: Scoreboard,
    pub phase: GamePhase,
}

impl MatchState {
    /// Serve-ready state with both paddles at their fixed x offsets
    pub fn new(arena: Arena) -> Self {
        Self {
            ball: Ball::new(),
            left_paddle: Paddle::new(PADDLE_OFFSET, LEFT_PADDLE_START_Y),
            right_paddle: Paddle::new(
                arena.width - PADDLE_OFFSET - PADDLE_WIDTH,
                RIGHT_PADDLE_START_Y,
            ),
            scores: Scoreboard::new(),
            phase: GamePhase::Playing,
            arena,
        }
    }
}
