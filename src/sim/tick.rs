//! Frame-timed simulation tick
//!
//! Advances ball, bricks and paddle by one elapsed-time step and resolves
//! the phase transitions that motion can cause.

use super::collision::{VerticalContact, exits_horizontal, first_brick_hit, vertical_contact};
use super::state::{BrickStatus, GamePhase, GameState};

/// Held movement keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by `dt` seconds and return the resulting phase.
///
/// No-op unless the phase is `Playing` and the surface has area. At most
/// one brick is destroyed per tick, even if the ball's path crossed more.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> GamePhase {
    if state.phase != GamePhase::Playing || state.is_degenerate() {
        return state.phase;
    }
    let dt = dt.max(0.0);
    let width = state.surface.x;
    let radius = state.ball.radius;
    let tentative = state.ball.pos + state.ball.displacement(dt);

    // Walls reflect, never clamp
    if exits_horizontal(tentative.x, radius, width) {
        state.ball.flip_x();
    }

    let plane = state.paddle_plane();
    match vertical_contact(tentative.y, state.ball.pos.x, radius, plane, &state.paddle) {
        VerticalContact::Ceiling | VerticalContact::Paddle => state.ball.flip_y(),
        VerticalContact::Missed => {
            state.phase = GamePhase::Lost;
            log::info!(
                "Ball lost at x={:.1} ({} bricks destroyed)",
                state.ball.pos.x,
                state.destroyed_count()
            );
            return state.phase;
        }
        VerticalContact::None => {}
    }

    // Bricks are tested against the center the ball had when the tick began
    if let Some(index) = first_brick_hit(&state.bricks, state.ball.pos) {
        state.bricks[index].status = BrickStatus::Destroyed;
        state.ball.flip_y();
        log::debug!("Brick {} destroyed, {} left", index, state.active_count());
    }

    if state.active_count() == 0 {
        state.phase = GamePhase::Won;
        log::info!("All bricks cleared");
        return state.phase;
    }

    state.ball.pos += state.ball.displacement(dt);
    move_paddle(state, input, dt);

    state.phase
}

/// Held keys move the paddle independently; bounds suppress and clamp
fn move_paddle(state: &mut GameState, input: &TickInput, dt: f32) {
    let max_x = state.paddle.max_x(state.surface.x);
    let delta = state.paddle.speed * dt;
    let paddle = &mut state.paddle;

    if input.left && paddle.x > 0.0 {
        paddle.x -= delta;
    }
    if input.right && paddle.x < max_x {
        paddle.x += delta;
    }
    paddle.x = paddle.x.clamp(0.0, max_x);
}

/// Demo mode: hold whichever key brings the paddle under the ball
pub fn autopilot(state: &GameState) -> TickInput {
    let center = state.paddle.x + state.paddle.width / 2.0;
    let dead_zone = state.paddle.width / 4.0;
    let target = state.ball.pos.x;

    TickInput {
        left: target < center - dead_zone,
        right: target > center + dead_zone,
    }
}
