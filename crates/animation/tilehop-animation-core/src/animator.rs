//! Animator: FIFO queue of animation units with one active unit per tick.
//!
//! Tick rules (`update`):
//! 1. With no active unit, the queue head is promoted and the tick ends there.
//! 2. Otherwise the active unit is stepped with the whole `dt`. If that leaves
//!    it done it is retired and the next unit is promoted, but not stepped.
//!
//! Time left over after a unit completes mid-tick is not handed to the next
//! unit, so every step lines up with a host frame. Under variable frame rates
//! a long chain drifts behind wall time by up to one frame per unit.

use std::collections::VecDeque;

use crate::animation::Animation;
use crate::ids::{AnimationId, IdAllocator};
use crate::outputs::{AnimatorEvent, AnimatorOutputs};
use crate::transform::TransformHost;

struct Entry {
    id: AnimationId,
    unit: Box<dyn Animation>,
}

#[derive(Default)]
pub struct Animator {
    ids: IdAllocator,
    queue: VecDeque<Entry>,
    active: Option<Entry>,

    // Per-tick outputs
    outputs: AnimatorOutputs,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `unit` behind everything already added.
    pub fn add(&mut self, unit: impl Animation + 'static) -> AnimationId {
        let id = self.ids.alloc_animation();
        self.queue.push_back(Entry {
            id,
            unit: Box::new(unit),
        });
        log::trace!("queued animation {id:?} ({} pending)", self.queue.len());
        id
    }

    /// Advance the active unit by `dt` seconds.
    pub fn update(&mut self, dt: f32, host: &mut dyn TransformHost) -> &AnimatorOutputs {
        self.outputs.clear();

        if self.active.is_none() {
            self.promote();
            return &self.outputs;
        }

        let finished = match self.active.as_mut() {
            Some(entry) => {
                entry.unit.step(dt, host);
                entry.unit.is_done()
            }
            None => false,
        };
        if finished {
            if let Some(entry) = self.active.take() {
                log::debug!("animation {:?} finished", entry.id);
                self.outputs.push_event(AnimatorEvent::Finished { id: entry.id });
            }
            self.promote();
        }
        &self.outputs
    }

    fn promote(&mut self) {
        if let Some(next) = self.queue.pop_front() {
            log::debug!("animation {:?} active", next.id);
            self.outputs.push_event(AnimatorEvent::Started { id: next.id });
            self.active = Some(next);
        }
    }

    /// Drop every pending and active unit. Effects already applied stay as they are.
    pub fn clear(&mut self) -> usize {
        let dropped = self.len();
        self.queue.clear();
        self.active = None;
        if dropped > 0 {
            log::debug!("animator cleared, dropped {dropped} units");
            self.outputs.push_event(AnimatorEvent::Cleared { dropped });
        }
        dropped
    }

    /// Outputs of the most recent `update` (plus any `clear` since).
    pub fn outputs(&self) -> &AnimatorOutputs {
        &self.outputs
    }

    pub fn active_id(&self) -> Option<AnimationId> {
        self.active.as_ref().map(|e| e.id)
    }

    pub fn pending_ids(&self) -> Vec<AnimationId> {
        self.queue.iter().map(|e| e.id).collect()
    }

    /// Active plus pending units.
    pub fn len(&self) -> usize {
        self.queue.len() + usize::from(self.active.is_some())
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::TransformStore;

    /// Unit that counts its own steps.
    struct Ticks {
        left: u32,
    }

    impl Animation for Ticks {
        fn step(&mut self, _dt: f32, _host: &mut dyn TransformHost) {
            self.left = self.left.saturating_sub(1);
        }

        fn is_done(&self) -> bool {
            self.left == 0
        }
    }

    #[test]
    fn promotion_consumes_a_tick() {
        let mut host = TransformStore::new();
        let mut animator = Animator::new();
        let id = animator.add(Ticks { left: 1 });

        let out = animator.update(0.016, &mut host);
        assert_eq!(out.events, vec![AnimatorEvent::Started { id }]);
        assert_eq!(animator.active_id(), Some(id));

        let out = animator.update(0.016, &mut host);
        assert_eq!(out.events, vec![AnimatorEvent::Finished { id }]);
        assert!(animator.is_idle());
    }

    #[test]
    fn idle_update_is_noop() {
        let mut host = TransformStore::new();
        let mut animator = Animator::new();
        assert!(animator.update(1.0, &mut host).is_empty());
        assert_eq!(animator.len(), 0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut host = TransformStore::new();
        let mut animator = Animator::new();
        animator.add(Ticks { left: 5 });
        animator.add(Ticks { left: 5 });
        animator.update(0.1, &mut host);
        assert_eq!(animator.len(), 2);
        assert_eq!(animator.clear(), 2);
        assert!(animator.is_idle());
        assert_eq!(
            animator.outputs().events.last(),
            Some(&AnimatorEvent::Cleared { dropped: 2 })
        );
    }
}
