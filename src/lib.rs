//! Brick Breaker - an embeddable canvas mini-game
//!
//! Core modules:
//! - `sim`: Frame-timed simulation (ball, paddle, bricks, phase machine)
//! - `renderer`: Scene description and 2D surface backends
//! - `platform`: Input collection, time sources and browser glue
//! - `game`: One component instance tying the pieces together
//! - `settings`: Per-instance colors and message styles

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{MessageStyle, Settings};

/// Game configuration constants
pub mod consts {
    /// Ball radius (pixels)
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball speed along each axis (pixels/second)
    pub const BALL_SPEED: f32 = 400.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_START_OFFSET: f32 = 30.0;

    /// Paddle defaults - width is a fraction of the surface width
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_WIDTH_FRACTION: f32 = 1.0 / 6.0;
    pub const PADDLE_SPEED: f32 = 500.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 40.0;
    pub const BRICK_OFFSET_SIDE: f32 = 30.0;

    /// Longest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
