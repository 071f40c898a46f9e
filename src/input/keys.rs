//! Debug key input
//!
//! Keyboard shortcuts that fire gestures directly, for testing without a
//! touch screen. Default bindings: arrow keys swipe, E taps, Space double taps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::gestures::GestureEvent;
use crate::Error;

/// A debug key press that maps 1:1 to a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DebugKey {
    Right,
    Left,
    Up,
    Down,
    Tap,
    DoubleTap,
}

impl DebugKey {
    pub fn all() -> [Self; 6] {
        [
            Self::Right,
            Self::Left,
            Self::Up,
            Self::Down,
            Self::Tap,
            Self::DoubleTap,
        ]
    }

    /// The gesture this key fires
    pub fn event(&self) -> GestureEvent {
        match self {
            Self::Right => GestureEvent::SwipeRight,
            Self::Left => GestureEvent::SwipeLeft,
            Self::Up => GestureEvent::SwipeUp,
            Self::Down => GestureEvent::SwipeDown,
            Self::Tap => GestureEvent::SingleTap,
            Self::DoubleTap => GestureEvent::DoubleTap,
        }
    }

    /// Name of the keyboard key bound to this action
    pub fn key_name(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Up => "up",
            Self::Down => "down",
            Self::Tap => "e",
            Self::DoubleTap => "space",
        }
    }
}

impl FromStr for DebugKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim().to_ascii_lowercase().as_str() {
            "right" | "rightarrow" => Self::Right,
            "left" | "leftarrow" => Self::Left,
            "up" | "uparrow" => Self::Up,
            "down" | "downarrow" => Self::Down,
            "e" | "tap" => Self::Tap,
            "space" | "doubletap" | "double_tap" => Self::DoubleTap,
            _ => return Err(Error::UnknownKey(s.to_string())),
        };
        Ok(key)
    }
}

impl TryFrom<String> for DebugKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DebugKey> for String {
    fn from(key: DebugKey) -> String {
        key.key_name().to_string()
    }
}

impl std::fmt::Display for DebugKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key_name())
    }
}
