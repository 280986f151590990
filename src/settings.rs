//! Component configuration
//!
//! Colors and message styles fixed for the lifetime of a session, parsed
//! from the host's JSON props.

use serde::{Deserialize, Serialize};

/// Text, color and font for one overlay message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageStyle {
    pub text: String,
    /// Any CSS color
    pub color: String,
    pub font_family: String,
    /// Pixels
    pub font_size: f32,
}

impl Default for MessageStyle {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: "#FFFFFF".to_string(),
            font_family: "Arial".to_string(),
            font_size: 24.0,
        }
    }
}

impl MessageStyle {
    fn with_text(text: &str, font_size: f32) -> Self {
        Self {
            text: text.to_string(),
            font_size,
            ..Self::default()
        }
    }

    /// CSS font shorthand, e.g. `24px Arial`
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Colors ===
    pub background_color: String,
    pub paddle_color: String,
    pub brick_color: String,

    // === Messages ===
    /// Shown before the first start
    pub start_message: MessageStyle,
    /// Shown after the ball is lost
    pub lost_message: MessageStyle,
    /// Shown after the last brick falls
    pub win_message: MessageStyle,
    /// Hint under the lost/win message
    pub restart_message: MessageStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_color: "#000000".to_string(),
            paddle_color: "#0095DD".to_string(),
            brick_color: "#0095DD".to_string(),

            start_message: MessageStyle::with_text("Press Enter to start", 24.0),
            lost_message: MessageStyle::with_text("Game Over", 32.0),
            win_message: MessageStyle::with_text("You Win!", 32.0),
            restart_message: MessageStyle::with_text("Press Enter to play again", 16.0),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse optional host props, falling back to defaults on bad input
    pub fn from_props(json: Option<&str>) -> Self {
        match json {
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
