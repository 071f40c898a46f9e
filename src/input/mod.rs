//! Input handling - touch, gestures, debug keys
//!
//! This module provides:
//! - Per-frame touch samples and gates
//! - Gesture recognition (swipes, taps, double taps)
//! - Debug key bindings
//! - Event delivery to listeners

mod bus;
mod gestures;
mod keys;
mod touch;

pub use bus::*;
pub use gestures::*;
pub use keys::*;
pub use touch::*;
