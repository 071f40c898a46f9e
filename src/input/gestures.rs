//! Gesture recognition system
//!
//! Tracks the first active touch only. Supports:
//! - Swipes (right, left, up, down), one per touch
//! - Single tap (contextual override in special mode)
//! - Double tap (two touch-downs inside a short window)
//! - Debug keys that fire gestures directly

use serde::Serialize;
use tracing::{debug, trace};

use super::touch::{Point, PointerSample, TickInput, TouchPhase};
use crate::config::GestureConfig;

/// Direction of a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    /// Classify a normalized movement vector.
    ///
    /// Horizontal only when `|x| > |y|`, so a perfect diagonal is vertical.
    /// Positive y is up.
    pub fn from_delta(delta: Point) -> Self {
        if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        } else if delta.y > 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeDirection::Up => write!(f, "Up"),
            SwipeDirection::Down => write!(f, "Down"),
            SwipeDirection::Left => write!(f, "Left"),
            SwipeDirection::Right => write!(f, "Right"),
        }
    }
}

/// Recognized gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GestureEvent {
    SwipeRight,
    SwipeLeft,
    SwipeUp,
    SwipeDown,
    SingleTap,
    DoubleTap,
}

impl GestureEvent {
    pub fn swipe(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Right => GestureEvent::SwipeRight,
            SwipeDirection::Left => GestureEvent::SwipeLeft,
            SwipeDirection::Up => GestureEvent::SwipeUp,
            SwipeDirection::Down => GestureEvent::SwipeDown,
        }
    }

    /// Swipe direction, or None for taps
    pub fn direction(&self) -> Option<SwipeDirection> {
        match self {
            GestureEvent::SwipeRight => Some(SwipeDirection::Right),
            GestureEvent::SwipeLeft => Some(SwipeDirection::Left),
            GestureEvent::SwipeUp => Some(SwipeDirection::Up),
            GestureEvent::SwipeDown => Some(SwipeDirection::Down),
            GestureEvent::SingleTap | GestureEvent::DoubleTap => None,
        }
    }
}

/// "Swiped this frame" flags for consumers that poll instead of subscribing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SwipeLatches {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
}

impl SwipeLatches {
    fn latch(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Right => self.right = true,
            SwipeDirection::Left => self.left = true,
            SwipeDirection::Up => self.up = true,
            SwipeDirection::Down => self.down = true,
        }
    }

    pub fn any(&self) -> bool {
        self.right || self.left || self.up || self.down
    }

    /// The latched direction, if a swipe happened this frame
    pub fn direction(&self) -> Option<SwipeDirection> {
        if self.right {
            Some(SwipeDirection::Right)
        } else if self.left {
            Some(SwipeDirection::Left)
        } else if self.up {
            Some(SwipeDirection::Up)
        } else if self.down {
            Some(SwipeDirection::Down)
        } else {
            None
        }
    }
}

/// Output of one recognizer frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameGestures {
    /// Gestures in emission order
    pub events: Vec<GestureEvent>,
    pub latches: SwipeLatches,
}

impl FrameGestures {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Single-pointer gesture recognizer state machine
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    config: GestureConfig,
    /// Touch-down position, normalized by screen width
    start_pos: Point,
    swipe_in_progress: bool,
    tap_count: u32,
    double_tap_timer: f64,
    latches: SwipeLatches,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            start_pos: Point::default(),
            swipe_in_progress: false,
            tap_count: 0,
            double_tap_timer: 0.0,
            latches: SwipeLatches::default(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Latches from the most recent enabled frame
    pub fn latches(&self) -> SwipeLatches {
        self.latches
    }

    pub fn tap_count(&self) -> u32 {
        self.tap_count
    }

    pub fn double_tap_timer(&self) -> f64 {
        self.double_tap_timer
    }

    pub fn is_swipe_in_progress(&self) -> bool {
        self.swipe_in_progress
    }

    /// Drop all gesture state (e.g. on level restart)
    pub fn reset(&mut self) {
        self.start_pos = Point::default();
        self.swipe_in_progress = false;
        self.tap_count = 0;
        self.double_tap_timer = 0.0;
        self.latches = SwipeLatches::default();
    }

    /// Run one frame of recognition
    pub fn update(&mut self, input: &TickInput) -> FrameGestures {
        // Disabled input leaves every bit of state alone
        if !input.gates.input_enabled {
            trace!("Input disabled, skipping frame");
            return FrameGestures::default();
        }

        self.latches = SwipeLatches::default();
        let mut events = Vec::new();

        if let Some(sample) = input.pointer {
            if !input.screen.is_usable() || !sample.position.is_finite() {
                trace!(?sample, screen = ?input.screen, "Ignoring unusable pointer sample");
            } else if self.handle_pointer(&sample, input, &mut events) {
                return FrameGestures {
                    events,
                    latches: self.latches,
                };
            }
        }

        if let Some(event) = self.update_taps(input.delta_time) {
            events.push(event);
        }

        if self.config.debug_keys {
            events.extend(input.keys.iter().map(|key| key.event()));
        }

        FrameGestures {
            events,
            latches: self.latches,
        }
    }

    /// Returns true when the frame must end right away
    fn handle_pointer(
        &mut self,
        sample: &PointerSample,
        input: &TickInput,
        events: &mut Vec<GestureEvent>,
    ) -> bool {
        match sample.phase {
            TouchPhase::Began => {
                if input.gates.special_mode && sample.position.y > input.screen.height / 2.0 {
                    debug!(position = ?sample.position, "Special-mode tap");
                    events.push(GestureEvent::SingleTap);
                    return true;
                }

                self.start_pos = input.screen.normalize(sample.position);
                self.tap_count += 1;
                trace!(start = ?self.start_pos, taps = self.tap_count, "Touch down");
            }
            TouchPhase::Moved if !self.swipe_in_progress => {
                let end_pos = input.screen.normalize(sample.position);
                let delta = end_pos - self.start_pos;

                // Too short, keep waiting for more movement
                if delta.length() < self.config.min_swipe_distance {
                    trace!(?delta, "Movement below swipe threshold");
                    return false;
                }

                self.swipe_in_progress = true;
                let direction = SwipeDirection::from_delta(delta);
                self.latches.latch(direction);
                debug!(%direction, ?delta, timestamp = sample.timestamp, "Swipe");
                events.push(GestureEvent::swipe(direction));
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.swipe_in_progress = false;
            }
            TouchPhase::Moved | TouchPhase::Stationary => {}
        }
        false
    }

    fn update_taps(&mut self, delta_time: f64) -> Option<GestureEvent> {
        if self.double_tap_timer > self.config.max_double_tap_time {
            trace!(timer = self.double_tap_timer, "Double tap window expired");
            self.double_tap_timer = 0.0;
            self.tap_count = 0;
            None
        } else if self.tap_count >= 2 {
            debug!(timer = self.double_tap_timer, "Double tap");
            self.double_tap_timer = 0.0;
            self.tap_count = 0;
            Some(GestureEvent::DoubleTap)
        } else {
            if self.tap_count > 0 {
                self.double_tap_timer += delta_time;
            }
            None
        }
    }
}
