//! Error types for startup and persistence
//!
//! The simulation itself never fails; everything here happens either while
//! acquiring resources at startup or while handling snapshots.

/// Error type for game operations
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// IO error from the filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image asset is missing a valid header
    #[error("Image asset error: {0}")]
    Image(String),

    /// Audio asset could not be decoded or has the wrong format
    #[error("Audio asset error: {0}")]
    Audio(String),

    /// Audio output device could not be opened
    #[error("Audio device error: {0}")]
    AudioDevice(String),

    /// Snapshot envelope is malformed or from an unknown version
    #[error("Snapshot error: {0}")]
    Save(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<hound::Error> for GameError {
    fn from(e: hound::Error) -> Self {
        match e {
            hound::Error::IoError(io) => GameError::Io(io),
            other => GameError::Audio(other.to_string()),
        }
    }
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
