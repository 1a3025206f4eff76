//! Per-tick outputs from the animator.

use serde::{Deserialize, Serialize};

use crate::ids::AnimationId;

/// Queue lifecycle signals emitted during `Animator::update`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimatorEvent {
    /// The unit became active and will be stepped from the next tick on.
    Started { id: AnimationId },
    /// The unit reported done and was dropped from the queue.
    Finished { id: AnimationId },
    /// Pending and active units were discarded by `Animator::clear`.
    Cleared { dropped: usize },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnimatorOutputs {
    #[serde(default)]
    pub events: Vec<AnimatorEvent>,
}

impl AnimatorOutputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: AnimatorEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn finished(&self) -> impl Iterator<Item = AnimationId> + '_ {
        self.events.iter().filter_map(|e| match e {
            AnimatorEvent::Finished { id } => Some(*id),
            _ => None,
        })
    }

    pub fn started(&self) -> impl Iterator<Item = AnimationId> + '_ {
        self.events.iter().filter_map(|e| match e {
            AnimatorEvent::Started { id } => Some(*id),
            _ => None,
        })
    }
}
