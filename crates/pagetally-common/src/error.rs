use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures at the edges of the crate: reading records and loading settings.
///
/// Aggregation itself never produces one of these. Bad records are skipped
/// and counted, not raised.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Invalid record at position {position}: {token:?}")]
    InvalidRecord { position: usize, token: String },
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    pub fn invalid_record(position: usize, token: impl Into<String>) -> Self {
        Error::InvalidRecord {
            position,
            token: token.into(),
        }
    }

    pub fn invalid_settings(msg: impl Into<String>) -> Self {
        Error::InvalidSettings(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::InvalidSettings(err.to_string())
    }
}
