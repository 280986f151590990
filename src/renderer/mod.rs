//! 2D rendering
//!
//! `scene` turns a `GameState` into an ordered list of draw commands; a
//! `Surface` backend executes them. Rendering never mutates game state.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::build_scene;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::GameState;

/// One drawing operation, in surface pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { color: String },
    /// Filled rectangle from its top-left corner
    Rect { pos: Vec2, size: Vec2, color: String },
    /// Filled circle
    Circle { center: Vec2, radius: f32, color: String },
    /// Text centered on `pos`
    Text {
        text: String,
        pos: Vec2,
        color: String,
        font: String,
    },
}

/// A 2D raster target
pub trait Surface {
    fn draw(&mut self, command: &DrawCommand);
}

/// Draw one frame of `state` onto `surface`
pub fn render(state: &GameState, settings: &Settings, surface: &mut impl Surface) {
    for command in build_scene(state, settings) {
        surface.draw(&command);
    }
}

/// Surface that keeps the last frame's commands (headless runs, tests)
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub frames: u64,
}

impl Surface for RecordingSurface {
    fn draw(&mut self, command: &DrawCommand) {
        if matches!(command, DrawCommand::Clear { .. }) {
            self.commands.clear();
            self.frames += 1;
        }
        self.commands.push(command.clone());
    }
}
