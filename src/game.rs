//! One component instance
//!
//! Owns the session state, settings, input flags and frame timing. Host
//! glue creates a `Game` on mount, calls `resize` when the surface changes,
//! `frame` once per display refresh, and `dispose` on teardown.

use crate::platform::input::InputCollector;
use crate::platform::time::{FrameDriver, TimeSource};
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

/// Game instance holding all per-component state
#[derive(Debug)]
pub struct Game {
    state: GameState,
    settings: Settings,
    input: InputCollector,
    driver: FrameDriver,
    last_phase: GamePhase,
}

impl Game {
    pub fn new(settings: Settings, width: f32, height: f32) -> Self {
        let state = GameState::new(width, height);
        let last_phase = state.phase;
        Self {
            state,
            settings,
            input: InputCollector::new(),
            driver: FrameDriver::new(),
            last_phase,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handle for event listeners; it can only touch the input flags
    pub fn input(&self) -> InputCollector {
        self.input.clone()
    }

    pub fn frames(&self) -> u64 {
        self.driver.frames()
    }

    /// A new surface size is a full reset, never an in-place rescale
    pub fn resize(&mut self, width: f32, height: f32) {
        log::info!("Surface resized to {}x{}", width, height);
        self.state.reset(width, height);
        self.last_phase = self.state.phase;
    }

    /// Run one display refresh at host timestamp `now_ms`.
    ///
    /// Returns false once disposed, telling the host to stop rescheduling.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl Surface) -> bool {
        if self.driver.is_disposed() {
            return false;
        }

        let input = self.input.take();
        if input.enter {
            self.state.handle_enter();
        }
        if let Some(dt) = self.driver.advance(now_ms) {
            self.state.step(&input.held, dt);
        }

        if self.state.phase != self.last_phase {
            log::info!("Phase {:?} -> {:?}", self.last_phase, self.state.phase);
            self.last_phase = self.state.phase;
        }

        renderer::render(&self.state, &self.settings, surface);
        true
    }

    /// Cooperative loop: one frame per clock reading until disposed or
    /// `keep_going` returns false. Returns the number of frames run.
    pub fn run_while<F>(
        &mut self,
        clock: &impl TimeSource,
        surface: &mut impl Surface,
        mut keep_going: F,
    ) -> u64
    where
        F: FnMut(&GameState, &InputCollector) -> bool,
    {
        let mut frames = 0;
        while keep_going(&self.state, &self.input) {
            if !self.frame(clock.now_ms(), &mut *surface) {
                break;
            }
            frames += 1;
        }
        frames
    }

    /// Stop the loop for good; later frames are refused
    pub fn dispose(&mut self) {
        if !self.driver.is_disposed() {
            log::info!("Game disposed after {} frames", self.driver.frames());
        }
        self.driver.dispose();
        self.input.release_all();
    }

    pub fn is_disposed(&self) -> bool {
        self.driver.is_disposed()
    }
}
