//! Scripted opponent
//!
//! A capped-reaction bot: one fixed vertical step toward the ball per tick,
//! holding when the ball is level with the paddle. No prediction.

use super::state::{Ball, Paddle};
use crate::consts::OPPONENT_STEP;

/// Steer a paddle toward the ball, one fixed step per tick
pub fn follow_ball(paddle: &mut Paddle, ball: &Ball) {
    let ball_box = ball.bounding_box();
    let paddle_box = paddle.bounding_box();

    if ball_box.top < paddle_box.top {
        paddle.move_by(-OPPONENT_STEP);
    } else if ball_box.bottom > paddle_box.bottom {
        paddle.move_by(OPPONENT_STEP);
    }
}
