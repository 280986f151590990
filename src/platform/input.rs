//! Keyboard input collection
//!
//! Event handlers only write these flags; the frame loop reads them. Left
//! and right are level-triggered (held), enter is an edge consumed once.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Enter,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Flags {
    left: AtomicBool,
    right: AtomicBool,
    enter: AtomicBool,
}

/// Everything the frame loop needs from the keyboard for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub held: TickInput,
    pub enter: bool,
}

/// Shared handle to the input flags. Clones see the same flags.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    flags: Arc<Flags>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down edge. Auto-repeated enter presses are not new edges.
    pub fn key_down(&self, key: Key, repeat: bool) {
        match key {
            Key::Left => self.flags.left.store(true, Ordering::Relaxed),
            Key::Right => self.flags.right.store(true, Ordering::Relaxed),
            Key::Enter if !repeat => self.flags.enter.store(true, Ordering::Relaxed),
            Key::Enter => {}
        }
    }

    /// Key-up edge
    pub fn key_up(&self, key: Key) {
        match key {
            Key::Left => self.flags.left.store(false, Ordering::Relaxed),
            Key::Right => self.flags.right.store(false, Ordering::Relaxed),
            Key::Enter => {}
        }
    }

    /// Returns true if the key is one the game uses
    pub fn dom_key_down(&self, key: &str, repeat: bool) -> bool {
        let Some(key) = Key::from_dom(key) else {
            return false;
        };
        self.key_down(key, repeat);
        true
    }

    /// Returns true if the key is one the game uses
    pub fn dom_key_up(&self, key: &str) -> bool {
        let Some(key) = Key::from_dom(key) else {
            return false;
        };
        self.key_up(key);
        true
    }

    /// Overwrite both held flags at once (demo autopilot)
    pub fn set_held(&self, held: TickInput) {
        self.flags.left.store(held.left, Ordering::Relaxed);
        self.flags.right.store(held.right, Ordering::Relaxed);
    }

    /// Drop held keys, e.g. when focus leaves and key-ups will never arrive
    pub fn release_all(&self) {
        self.set_held(TickInput::default());
    }

    /// Current held flags without consuming anything
    pub fn held(&self) -> TickInput {
        TickInput {
            left: self.flags.left.load(Ordering::Relaxed),
            right: self.flags.right.load(Ordering::Relaxed),
        }
    }

    /// Held flags plus the pending enter edge, which is cleared
    pub fn take(&self) -> InputSnapshot {
        InputSnapshot {
            held: self.held(),
            enter: self.flags.enter.swap(false, Ordering::Relaxed),
        }
    }
}
