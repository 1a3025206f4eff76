//! Elapsed-time bookkeeping shared by every timed unit.

use serde::{Deserialize, Serialize};

/// Accumulates frame deltas against a fixed duration.
///
/// Completion is latched: once `elapsed >= duration` the clock stays done and
/// further [`Clock::advance`] calls return `None`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clock {
    elapsed: f32,
    duration: f32,
    done: bool,
}

impl Clock {
    /// Negative durations are treated as zero (done on the first advance).
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration.max(0.0),
            done: false,
        }
    }

    /// Add `dt` and return the normalized progress `min(elapsed / duration, 1)`,
    /// or `None` if the clock had already completed.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        if self.done {
            return None;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration {
            self.done = true;
        }
        Some(self.progress())
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).min(1.0)
        } else if self.done {
            1.0
        } else {
            0.0
        }
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_at_duration_and_latches() {
        let mut c = Clock::new(0.2);
        assert_eq!(c.advance(0.1), Some(0.5));
        assert!(!c.is_done());
        assert_eq!(c.advance(0.15), Some(1.0));
        assert!(c.is_done());
        assert_eq!(c.advance(0.1), None);
        assert!((c.elapsed() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_duration_finishes_on_first_advance() {
        let mut c = Clock::new(0.0);
        assert_eq!(c.progress(), 0.0);
        assert_eq!(c.advance(0.0), Some(1.0));
        assert!(c.is_done());
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let mut c = Clock::new(1.0);
        c.advance(0.5);
        c.advance(-0.4);
        assert_eq!(c.elapsed(), 0.5);
    }
}
