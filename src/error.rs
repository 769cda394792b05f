#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Generic error: {0}")]
    Generic(&'static str),
    #[error("Invalid: {0}")]
    Invalid(&'static str),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("Not found: {0}")]
    NotFound(&'static str),
    #[error("Random source error: {0}")]
    RandomSource(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Timestamp overflow: {0}")]
    TimestampOverflow(&'static str),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Self::Generic(s)
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomSource(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
