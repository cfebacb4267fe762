// Errors raised while building units or loading lineups
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load image {path}")]
    ImageLoad { path: String },

    #[error("position ({x}, {y}) is off the board")]
    OffGrid { x: i32, y: i32 },

    #[error("failed to read file: {0}")]
    File(String),

    #[error("invalid lineup file: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    #[error("invalid lineup json: {0}")]
    Json(#[from] serde_json::Error),
}
