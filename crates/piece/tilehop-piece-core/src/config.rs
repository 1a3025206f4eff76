//! Piece tuning and per-piece gameplay data.

use serde::{Deserialize, Serialize};
use tilehop_curve_core::{vec3, BezierEasing, Vec3};

use crate::error::PieceError;

/// Animation tuning shared by every piece of a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceConfig {
    /// Degrees per second for camera-facing turns.
    pub angular_speed: f32,
    /// Foot squash before a hop and after a landing.
    pub bounce_duration: f32,
    pub jump_duration: f32,
    /// Peak lift above the straight line between tiles.
    pub jump_height: f32,
    pub jump_easing: BezierEasing,
    /// Crossfade used for selection clip requests.
    pub clip_crossfade: f32,
}

impl Default for PieceConfig {
    fn default() -> Self {
        Self {
            angular_speed: 360.0,
            bounce_duration: 0.15,
            jump_duration: 0.4,
            jump_height: 1.0,
            jump_easing: BezierEasing::BLUEPRINT_1,
            clip_crossfade: 0.1,
        }
    }
}

impl PieceConfig {
    /// Parse a config document; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, PieceError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceData {
    /// Score awarded for the piece.
    pub point: i32,
    /// Bounding box extents.
    pub size: Vec3,
}

impl Default for PieceData {
    fn default() -> Self {
        Self {
            point: 0,
            size: vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = PieceConfig::from_json(r#"{ "jump_height": 2.5 }"#).unwrap();
        assert_eq!(cfg.jump_height, 2.5);
        assert_eq!(cfg.bounce_duration, 0.15);
        assert_eq!(cfg.jump_easing, BezierEasing::BLUEPRINT_1);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = PieceConfig::from_json("{ \"angular_speed\": \"fast\" }").unwrap_err();
        assert!(matches!(err, PieceError::Config(_)));
    }
}
