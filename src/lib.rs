//! Rally Pong - a classic two-paddle rally game for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, match state)
//! - `renderer`: Draw-command contract and the terminal renderer
//! - `input`: Pointer/keyboard adapter feeding the player paddle
//! - `settings`: Presentation preferences

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed interval between match ticks
    pub const TICK_INTERVAL_MS: u64 = 30;

    /// The ball is a square of this side length
    pub const BALL_SIZE: f32 = 5.0;
    /// Serve position, assigned at match start and after every point
    pub const SERVE_POS: Vec2 = Vec2::new(20.0, 30.0);
    /// Serve velocity
    pub const SERVE_VEL: Vec2 = Vec2::new(4.0, 2.0);

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Horizontal gap between each paddle and its wall
    pub const PADDLE_OFFSET: f32 = 10.0;
    /// Starting y for the left (scripted) paddle
    pub const LEFT_PADDLE_START_Y: f32 = 10.0;
    /// Starting y for the right (player) paddle
    pub const RIGHT_PADDLE_START_Y: f32 = 30.0;

    /// Change to the ball's vertical speed per paddle-edge hit
    pub const EDGE_SPIN: f32 = 0.5;
    /// Vertical step of the scripted opponent, per tick
    pub const OPPONENT_STEP: f32 = 2.0;
    /// First side to reach this score wins the match
    pub const WIN_SCORE: u32 = 5;
}
