//! Per-tick outputs from a piece.

use serde::{Deserialize, Serialize};
use tilehop_animation_core::AnimatorEvent;
use tilehop_curve_core::Vec3;

/// Ask the host to play a named clip on the piece's skeletal animator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipRequest {
    pub clip: String,
    /// Crossfade seconds; `None` plays the clip immediately.
    pub crossfade: Option<f32>,
}

impl ClipRequest {
    pub fn play(clip: impl Into<String>) -> Self {
        Self {
            clip: clip.into(),
            crossfade: None,
        }
    }

    pub fn crossfade(clip: impl Into<String>, seconds: f32) -> Self {
        Self {
            clip: clip.into(),
            crossfade: Some(seconds),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PieceEvent {
    PlayClip(ClipRequest),
    /// A jump queued by `Piece::jump_to` reached its destination.
    Landed { flag: i32, position: Vec3 },
    Animator(AnimatorEvent),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PieceOutputs {
    #[serde(default)]
    pub events: Vec<PieceEvent>,
}

impl PieceOutputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: PieceEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clips(&self) -> impl Iterator<Item = &ClipRequest> + '_ {
        self.events.iter().filter_map(|e| match e {
            PieceEvent::PlayClip(request) => Some(request),
            _ => None,
        })
    }

    pub fn landed_flags(&self) -> impl Iterator<Item = i32> + '_ {
        self.events.iter().filter_map(|e| match e {
            PieceEvent::Landed { flag, .. } => Some(*flag),
            _ => None,
        })
    }
}
