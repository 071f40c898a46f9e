//! Touch input handling

use serde::{Deserialize, Serialize};

use super::keys::DebugKey;

/// A 2D position in screen pixels (or normalized units)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Screen dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether positions can be normalized against this screen
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }

    /// Normalize a pixel position by screen width.
    ///
    /// Both axes are divided by width, so y is measured in screen widths too.
    pub fn normalize(&self, pos: Point) -> Point {
        Point::new(pos.x / self.width, pos.y / self.width)
    }
}

/// Phase of the tracked touch in the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    /// Finger went down this frame
    Began,
    /// Finger moved since last frame
    Moved,
    /// Finger is down but did not move
    Stationary,
    /// Finger lifted
    Ended,
    /// Platform aborted the touch
    Cancelled,
}

/// Raw touch sample for the first active pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub phase: TouchPhase,
    pub timestamp: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, phase: TouchPhase, timestamp: f64) -> Self {
        Self {
            position: Point::new(x, y),
            phase,
            timestamp,
        }
    }
}

/// Externally owned conditions checked every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputGates {
    /// Game is running and the player is alive
    pub input_enabled: bool,
    /// Contextual override: touches on the upper half of the screen become taps
    pub special_mode: bool,
}

impl InputGates {
    pub fn enabled() -> Self {
        Self {
            input_enabled: true,
            special_mode: false,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_special_mode(mut self, special_mode: bool) -> Self {
        self.special_mode = special_mode;
        self
    }
}

/// Everything the recognizer consumes in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct TickInput {
    /// First active touch, if any
    pub pointer: Option<PointerSample>,
    /// Debug keys that went down this frame, in press order
    pub keys: Vec<DebugKey>,
    /// Seconds since the previous frame
    pub delta_time: f64,
    pub screen: ScreenSize,
    pub gates: InputGates,
}

impl TickInput {
    pub fn new(screen: ScreenSize, gates: InputGates, delta_time: f64) -> Self {
        Self {
            pointer: None,
            keys: Vec::new(),
            delta_time,
            screen,
            gates,
        }
    }

    pub fn with_pointer(mut self, sample: PointerSample) -> Self {
        self.pointer = Some(sample);
        self
    }

    pub fn with_key(mut self, key: DebugKey) -> Self {
        self.keys.push(key);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uses_width_for_both_axes() {
        let screen = ScreenSize::new(1000.0, 2000.0);
        let p = screen.normalize(Point::new(500.0, 1000.0));
        assert!((p.x - 0.5).abs() < 1e-9);
        assert!((p.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unusable_screen() {
        assert!(!ScreenSize::new(0.0, 100.0).is_usable());
        assert!(!ScreenSize::new(-10.0, 100.0).is_usable());
        assert!(!ScreenSize::new(f64::NAN, 100.0).is_usable());
        assert!(ScreenSize::new(1.0, 0.0).is_usable());
    }

    #[test]
    fn test_phase_names() {
        let phase: TouchPhase = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(phase, TouchPhase::Cancelled);
    }
}
