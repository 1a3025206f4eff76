use thiserror::Error;

#[derive(Debug, Error)]
pub enum PieceError {
    #[error("piece target '{0}' not found in host")]
    MissingTarget(String),
    #[error("camera at {camera:?} is on the up axis of '{target}'; no facing direction")]
    DegenerateFacing { target: String, camera: [f32; 3] },
    #[error("invalid piece config: {0}")]
    Config(#[from] serde_json::Error),
}
