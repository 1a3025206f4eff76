//! Idle wait with an optional one-shot callback.

use std::fmt;

use crate::animation::Animation;
use crate::clock::Clock;
use crate::transform::TransformHost;

/// Holds the queue for `duration` seconds, then fires its callback once.
pub struct Delay {
    clock: Clock,
    then: Option<Box<dyn FnOnce()>>,
}

impl Delay {
    pub fn new(duration: f32) -> Self {
        Self {
            clock: Clock::new(duration),
            then: None,
        }
    }

    pub fn then(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.then = Some(Box::new(callback));
        self
    }
}

impl Animation for Delay {
    fn step(&mut self, dt: f32, _host: &mut dyn TransformHost) {
        if self.clock.advance(dt).is_none() {
            return;
        }
        if self.clock.is_done() {
            if let Some(callback) = self.then.take() {
                callback();
            }
        }
    }

    fn is_done(&self) -> bool {
        self.clock.is_done()
    }
}

impl fmt::Debug for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delay")
            .field("clock", &self.clock)
            .field("has_callback", &self.then.is_some())
            .finish()
    }
}
