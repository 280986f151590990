//! Brick Breaker entry point
//!
//! On the web the game mounts itself on `#canvas`; hosts embedding the
//! component call `mount` from the library instead. Natively it plays a
//! headless demo session on a simulated 60 Hz clock.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    let handle = brick_breaker::platform::web::mount("canvas", None)?;
    // The standalone page never unmounts
    std::mem::forget(handle);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::platform::{Key, ManualClock};
    use brick_breaker::renderer::RecordingSurface;
    use brick_breaker::sim::autopilot;
    use brick_breaker::{Game, Settings};

    /// Two simulated minutes
    const DEMO_FRAMES: u64 = 60 * 120;

    env_logger::init();
    log::info!("Brick Breaker (native) starting headless demo...");

    let mut game = Game::new(Settings::default(), 700.0, 500.0);
    let mut surface = RecordingSurface::default();
    let clock = ManualClock::sixty_hz();

    game.input().key_down(Key::Enter, false);
    let mut remaining = DEMO_FRAMES;
    let frames = game.run_while(&clock, &mut surface, |state, input| {
        if state.phase.is_terminal() || remaining == 0 {
            return false;
        }
        remaining -= 1;
        input.set_held(autopilot(state));
        true
    });

    let state = game.state();
    println!(
        "Demo finished after {} frames: {:?}, {}/{} bricks destroyed",
        frames,
        state.phase,
        state.destroyed_count(),
        state.bricks.len()
    );
    game.dispose();
}
