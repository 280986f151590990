//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/frame deltas
//! - Input events
//! - Mounting on a page (web only)

pub mod input;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputCollector, InputSnapshot, Key};
pub use time::{FrameDriver, ManualClock, TimeSource};
