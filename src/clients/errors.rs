use rspotify::ClientError;
use rspotify::model::IdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Spotify error: {0}")]
    SpotifyError(#[from] ClientError),

    #[error("Invalid track id: {0}")]
    InvalidTrackId(#[from] IdError),

    #[error("Unexpected catalog response: {0}")]
    UnexpectedResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("select at least one seed track")]
    NoSeedsSelected,

    #[error("at most 3 seed tracks may be sent, got {0}")]
    TooManySeeds(usize),

    #[error("recommendation count {0} is outside the allowed 5-50 range")]
    CountOutOfRange(u32),

    #[error("no such seed slot: {0}")]
    InvalidSlot(usize),

    #[error("no search result {choice} in slot {slot}")]
    InvalidPick { slot: usize, choice: usize },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
