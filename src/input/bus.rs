//! Gesture event delivery
//!
//! Listeners are called synchronously, in subscription order, once per event.

use super::gestures::{FrameGestures, GestureEvent};

/// Receiver of recognized gestures
pub trait GestureListener {
    fn on_gesture(&mut self, event: GestureEvent);
}

impl<F> GestureListener for F
where
    F: FnMut(GestureEvent),
{
    fn on_gesture(&mut self, event: GestureEvent) {
        self(event)
    }
}

/// Subscriber list for gesture events
#[derive(Default)]
pub struct GestureBus {
    listeners: Vec<Box<dyn GestureListener>>,
}

impl GestureBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl GestureListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver a frame's events to every listener
    pub fn dispatch(&mut self, frame: &FrameGestures) {
        for &event in &frame.events {
            for listener in self.listeners.iter_mut() {
                listener.on_gesture(event);
            }
        }
    }
}

impl std::fmt::Debug for GestureBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = GestureBus::new();

        let first = Rc::clone(&log);
        bus.subscribe(move |e: GestureEvent| first.borrow_mut().push((1, e)));
        let second = Rc::clone(&log);
        bus.subscribe(move |e: GestureEvent| second.borrow_mut().push((2, e)));
        assert_eq!(bus.listener_count(), 2);

        let frame = FrameGestures {
            events: vec![GestureEvent::SwipeUp, GestureEvent::DoubleTap],
            ..Default::default()
        };
        bus.dispatch(&frame);

        assert_eq!(
            *log.borrow(),
            vec![
                (1, GestureEvent::SwipeUp),
                (2, GestureEvent::SwipeUp),
                (1, GestureEvent::DoubleTap),
                (2, GestureEvent::DoubleTap),
            ]
        );
    }

    #[test]
    fn test_empty_frame_calls_nobody() {
        let calls = Rc::new(RefCell::new(0));
        let mut bus = GestureBus::new();
        let counter = Rc::clone(&calls);
        bus.subscribe(move |_: GestureEvent| *counter.borrow_mut() += 1);

        bus.dispatch(&FrameGestures::default());
        assert_eq!(*calls.borrow(), 0);
    }
}
