//! Rendering contract
//!
//! The simulation knows nothing about surfaces. A frame is a typed, ordered
//! sequence of draw commands composed from match state; a `Renderer`
//! consumes the sequence for its side effects.

pub mod term;

use std::io;

use crate::sim::{MatchState, Rect};

/// One drawing instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Blank the whole surface
    Clear,
    /// Fill a rectangle, in surface coordinates
    FillRect(Rect),
    /// Score readout: left value left-aligned, right value right-aligned
    Scores { left: u32, right: u32 },
    /// Centered end-of-match overlay
    GameOver,
}

/// Anything that can realize a frame of draw commands
pub trait Renderer {
    fn submit(&mut self, frame: &[DrawCommand]) -> io::Result<()>;
}

/// Project match state into a frame: clear, entities, scores
///
/// The game-over overlay is not part of the regular frame; the host loop
/// appends it once after the final render.
pub fn compose_frame(state: &MatchState) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Clear,
        DrawCommand::FillRect(state.ball.rect),
        DrawCommand::FillRect(state.left_paddle.rect),
        DrawCommand::FillRect(state.right_paddle.rect),
        DrawCommand::Scores {
            left: state.scores.left,
            right: state.scores.right,
        },
    ]
}
