//! Game state and core simulation types
//!
//! One `GameState` per component instance. Only the simulation step and the
//! phase-machine methods here write its fields.

use glam::Vec2;

use super::tick::{TickInput, tick};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh grid, waiting for the start input
    NotStarted,
    /// Active gameplay
    Playing,
    /// Ball passed the paddle plane without contact
    Lost,
    /// Every brick destroyed
    Won,
}

impl GamePhase {
    /// Lost and Won end a session until restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Lost | GamePhase::Won)
    }
}

/// The ball. Direction components are always +1 or -1.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
}

impl Ball {
    /// Ball resting a fixed offset above the paddle, heading up and right
    pub fn spawn(surface: Vec2) -> Self {
        Self {
            pos: Vec2::new(surface.x / 2.0, surface.y - BALL_START_OFFSET),
            dir: Vec2::new(1.0, -1.0),
            speed: BALL_SPEED,
            radius: BALL_RADIUS,
        }
    }

    /// Displacement over `dt` seconds along the current direction
    #[inline]
    pub fn displacement(&self, dt: f32) -> Vec2 {
        self.dir * self.speed * dt
    }

    #[inline]
    pub fn flip_x(&mut self) {
        self.dir.x = -self.dir.x;
    }

    #[inline]
    pub fn flip_y(&mut self) {
        self.dir.y = -self.dir.y;
    }
}

/// The player's paddle, resting on the bottom edge
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    /// Paddle centered horizontally on a surface of the given width
    pub fn centered(surface_width: f32) -> Self {
        let width = surface_width * PADDLE_WIDTH_FRACTION;
        Self {
            x: (surface_width - width) / 2.0,
            width,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }

    /// Whether `x` lies within the paddle's horizontal span (inclusive)
    pub fn spans(&self, x: f32) -> bool {
        x >= self.x && x <= self.x + self.width
    }

    /// Largest left-edge position that keeps the paddle on the surface
    pub fn max_x(&self, surface_width: f32) -> f32 {
        (surface_width - self.width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickStatus {
    Active,
    Destroyed,
}

/// A brick in the grid. Position and size never change after layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub status: BrickStatus,
}

impl Brick {
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }

    /// Strict containment: a point on the edge is outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + self.size.x
            && point.y > self.pos.y
            && point.y < self.pos.y + self.size.y
    }
}

/// Lay out the full brick grid, row-major, for a surface of the given width
pub fn layout_bricks(surface_width: f32) -> Vec<Brick> {
    let brick_width = ((surface_width
        - 2.0 * BRICK_OFFSET_SIDE
        - (BRICK_COLS as f32 - 1.0) * BRICK_PADDING)
        / BRICK_COLS as f32)
        .max(0.0);
    let size = Vec2::new(brick_width, BRICK_HEIGHT);

    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            let x = BRICK_OFFSET_SIDE + col as f32 * (brick_width + BRICK_PADDING);
            let y = BRICK_OFFSET_TOP + row as f32 * (BRICK_HEIGHT + BRICK_PADDING);
            bricks.push(Brick {
                pos: Vec2::new(x, y),
                size,
                status: BrickStatus::Active,
            });
        }
    }
    bricks
}

/// Complete session state for one component instance
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Drawing surface size (width, height)
    pub surface: Vec2,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Grid in row-major order
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Create a session for a surface of the given size
    pub fn new(width: f32, height: f32) -> Self {
        let surface = Vec2::new(width, height);
        let mut state = Self {
            surface,
            phase: GamePhase::NotStarted,
            ball: Ball::spawn(surface),
            paddle: Paddle::centered(width),
            bricks: Vec::new(),
        };
        state.reset(width, height);
        state
    }

    /// Whether the surface has no drawable area
    pub fn is_degenerate(&self) -> bool {
        !(self.surface.x > 0.0 && self.surface.y > 0.0)
    }

    /// Reinitialize everything for a (possibly new) surface size
    pub fn reset(&mut self, width: f32, height: f32) {
        self.surface = Vec2::new(width, height);
        self.phase = GamePhase::NotStarted;

        if self.is_degenerate() {
            log::warn!("Degenerate surface {}x{}, session left empty", width, height);
            self.ball = Ball::spawn(Vec2::ZERO);
            self.paddle = Paddle::centered(0.0);
            self.bricks.clear();
            return;
        }

        self.ball = Ball::spawn(self.surface);
        self.paddle = Paddle::centered(width);
        self.bricks = layout_bricks(width);
        log::info!(
            "Session reset: {}x{} surface, {} bricks",
            width,
            height,
            self.bricks.len()
        );
    }

    /// NotStarted -> Playing. Returns whether the transition happened.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted || self.is_degenerate() {
            return false;
        }
        self.phase = GamePhase::Playing;
        log::info!("Game started");
        true
    }

    /// Full reset on the current surface, then start. Only from Lost or Won.
    pub fn restart(&mut self) -> bool {
        if !self.phase.is_terminal() {
            return false;
        }
        let (width, height) = (self.surface.x, self.surface.y);
        self.reset(width, height);
        self.start()
    }

    /// Interpret the enter action for the current phase
    pub fn handle_enter(&mut self) -> bool {
        match self.phase {
            GamePhase::NotStarted => self.start(),
            GamePhase::Lost | GamePhase::Won => self.restart(),
            GamePhase::Playing => false,
        }
    }

    /// Advance one tick of `dt` seconds; returns the resulting phase
    pub fn step(&mut self, input: &TickInput, dt: f32) -> GamePhase {
        tick(self, input, dt)
    }

    /// y coordinate past which the ball must meet the paddle
    pub fn paddle_plane(&self) -> f32 {
        self.surface.y - self.ball.radius - self.paddle.height
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_active()).count()
    }

    pub fn destroyed_count(&self) -> usize {
        self.bricks.len() - self.active_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_layout() {
        let state = GameState::new(700.0, 500.0);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.bricks.len(), BRICK_ROWS * BRICK_COLS);
        assert_eq!(state.ball.pos, Vec2::new(350.0, 470.0));
        assert_eq!(state.ball.dir, Vec2::new(1.0, -1.0));
        assert!((state.paddle.width - 700.0 / 6.0).abs() < 1e-3);
        assert!((state.paddle.x + state.paddle.width / 2.0 - 350.0).abs() < 1e-3);
        assert!((state.paddle_plane() - 480.0).abs() < 1e-3);
    }

    #[test]
    fn test_grid_is_row_major_and_fits() {
        let bricks = layout_bricks(700.0);
        assert!(bricks[0].pos.x < bricks[1].pos.x);
        assert_eq!(bricks[0].pos.y, bricks[BRICK_COLS - 1].pos.y);
        assert!(bricks[BRICK_COLS].pos.y > bricks[0].pos.y);

        let last = &bricks[BRICK_COLS - 1];
        let right_edge = last.pos.x + last.size.x;
        assert!((right_edge - (700.0 - BRICK_OFFSET_SIDE)).abs() < 1e-3);
    }

    #[test]
    fn test_brick_contains_is_strict() {
        let brick = Brick {
            pos: Vec2::new(10.0, 10.0),
            size: Vec2::new(20.0, 10.0),
            status: BrickStatus::Active,
        };
        assert!(brick.contains(Vec2::new(15.0, 15.0)));
        assert!(!brick.contains(Vec2::new(10.0, 15.0)));
        assert!(!brick.contains(Vec2::new(15.0, 20.0)));
    }

    #[test]
    fn test_phase_machine() {
        let mut state = GameState::new(700.0, 500.0);

        // Restart is refused before a session ends
        assert!(!state.restart());
        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Playing);

        // Start only works from NotStarted
        assert!(!state.start());
        assert!(!state.handle_enter());
        assert!(!state.restart());

        state.phase = GamePhase::Lost;
        state.bricks[0].status = BrickStatus::Destroyed;
        assert!(state.handle_enter());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.destroyed_count(), 0);
    }

    #[test]
    fn test_degenerate_surface() {
        let mut state = GameState::new(0.0, 500.0);
        assert!(state.is_degenerate());
        assert!(state.bricks.is_empty());
        assert!(!state.start());
        assert_eq!(state.phase, GamePhase::NotStarted);

        state.reset(700.0, 0.0);
        assert!(state.is_degenerate());
        assert!(!state.handle_enter());
    }
}
