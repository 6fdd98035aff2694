use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid direction vector ({dx}, {dy}), expected a cardinal unit vector")]
    InvalidDirection { dx: i32, dy: i32 },

    #[error("invalid game config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse game config: {0}")]
    Json(#[from] serde_json::Error),
}
