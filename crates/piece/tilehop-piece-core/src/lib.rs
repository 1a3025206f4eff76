//! Tilehop Piece Core
//!
//! The game-side controller for one board piece. A [`Piece`] turns gameplay
//! requests (hop to a tile, land, react to tile selection) into units on its
//! own [`Animator`](tilehop_animation_core::Animator) and reports clip
//! playback requests and landings through [`PieceOutputs`].
//!
//! Camera position, yaw offsets and delays are plain parameters; hosts pick
//! any randomization themselves.

pub mod config;
pub mod error;
pub mod outputs;
pub mod piece;

pub use config::{PieceConfig, PieceData};
pub use error::PieceError;
pub use outputs::{ClipRequest, PieceEvent, PieceOutputs};
pub use piece::Piece;
