//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Elapsed-time steps supplied by the caller
//! - Stable iteration order (grid order for bricks)
//! - Single writer: nothing outside `sim` mutates ball, paddle or bricks

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{VerticalContact, exits_horizontal, first_brick_hit, vertical_contact};
pub use state::{Ball, Brick, BrickStatus, GamePhase, GameState, Paddle, layout_bricks};
pub use tick::{TickInput, autopilot, tick};
