//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable step order within a tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod opponent;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{PaddleContact, WallContact, paddle_contact, wall_contact};
pub use opponent::follow_ball;
pub use rect::{BoundingBox, Rect};
pub use state::{Arena, Ball, GamePhase, MatchState, Paddle, Scoreboard, Side};
pub use tick::{TickEvents, TickInput, tick};
