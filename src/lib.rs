//! Swipe input - gesture recognition for single-pointer mobile game input
//!
//! Turns a stream of per-frame pointer samples and debug key presses into
//! discrete gesture events:
//! - Swipes (right, left, up, down)
//! - Single tap
//! - Double tap
//!
//! The recognizer is polled once per frame by the game loop:
//!
//! ```text
//!   input source ──► TickInput ──► GestureRecognizer::update ──► FrameGestures
//!                                                                     │
//!                                      GestureBus::dispatch ◄─────────┘
//!                                             │
//!                                     listeners (player, UI, ...)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use swipe_input::{
//!     GestureConfig, GestureEvent, GestureRecognizer, InputGates, PointerSample,
//!     ScreenSize, TickInput, TouchPhase,
//! };
//!
//! let mut recognizer = GestureRecognizer::new(GestureConfig::default());
//! let screen = ScreenSize::new(1000.0, 2000.0);
//! let gates = InputGates::enabled();
//!
//! let down = TickInput::new(screen, gates, 0.016)
//!     .with_pointer(PointerSample::new(500.0, 1000.0, TouchPhase::Began, 0.0));
//! recognizer.update(&down);
//!
//! let drag = TickInput::new(screen, gates, 0.016)
//!     .with_pointer(PointerSample::new(520.0, 1000.0, TouchPhase::Moved, 0.016));
//! let frame = recognizer.update(&drag);
//!
//! assert_eq!(frame.events, vec![GestureEvent::SwipeRight]);
//! assert!(frame.latches.right);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod scenario;

pub use config::GestureConfig;
pub use error::Error;
pub use input::{
    DebugKey, FrameGestures, GestureBus, GestureEvent, GestureListener, GestureRecognizer,
    InputGates, Point, PointerSample, ScreenSize, SwipeDirection, SwipeLatches, TickInput,
    TouchPhase,
};
pub use scenario::{replay, ReplayEvent, Scenario};

/// Result type for this crate
pub type Result<T> = std::result::Result<T, Error>;
