//! Error type shared by the playback core.
//!
//! None of these are fatal: UI handlers log them and keep the page interactive.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayerError {
    #[error("no catalog entry with id \"{0}\"")]
    NotFound(String),
    #[error("the media element refused to start playback")]
    PlaybackRejected,
    #[error("media duration is not known yet")]
    MissingDuration,
    #[error("{what} out of range: {value}")]
    InvalidRange { what: &'static str, value: f64 },
    #[error("no active playback session")]
    NoActiveSession,
    #[error("no media element is attached")]
    NoMediaElement,
    #[error("duplicate catalog entry id \"{0}\"")]
    DuplicateEntry(String),
    #[error("failed to parse catalog: {0}")]
    Catalog(String),
    #[error("failed to parse settings: {0}")]
    Settings(String),
}

pub type PlayerResult<T> = Result<T, PlayerError>;
