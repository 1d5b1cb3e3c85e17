//! Fixed timestep match tick
//!
//! Advances one match by one step. Rendering stays in the host loop; the
//! tick sees input only through `TickInput`, snapshotted from the adapter
//! at the tick boundary.

use super::opponent::follow_ball;
use super::state::{GamePhase, MatchState, Side};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Absolute target y for the player paddle (pointer position), unclamped
    pub paddle_y: Option<f32>,
}

/// What happened during a tick, for the host loop's logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Paddle the ball bounced off
    pub paddle_hit: Option<Side>,
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Side awarded a point
    pub point_to: Option<Side>,
    /// Match ended on this tick
    pub game_over: bool,
}

/// Advance the match by one fixed step
///
/// Step order is load-bearing: collisions are resolved against the ball's
/// position after this tick's movement, and the opponent reacts to the
/// moved ball.
pub fn tick(state: &mut MatchState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    if state.phase == GamePhase::Over {
        return events;
    }

    // Pointer input wins over whatever position the paddle held last tick
    if let Some(y) = input.paddle_y {
        state.right_paddle.set_y(y);
    }

    state.ball.advance();
    follow_ball(&mut state.left_paddle, &state.ball);

    // Horizontal speed magnitude carries across a bounce; only the sign is
    // forced away from the struck paddle.
    let vx = state.ball.vel.x.abs();
    if state.ball.check_paddle_collision(&state.left_paddle, vx) {
        events.paddle_hit = Some(Side::Left);
    }
    let vx = state.ball.vel.x.abs();
    if state.ball.check_paddle_collision(&state.right_paddle, -vx) {
        events.paddle_hit = Some(Side::Right);
    }

    let contact = state
        .ball
        .check_wall_collision(&state.arena, &mut state.scores);
    events.wall_bounce = contact.vertical_bounce;
    if contact.exit_left {
        events.point_to = Some(Side::Right);
    }
    if contact.exit_right {
        events.point_to = Some(Side::Left);
    }

    if state.scores.winner().is_some() {
        state.phase = GamePhase::Over;
        events.game_over = true;
    }

    events
}
