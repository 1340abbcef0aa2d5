use thiserror::Error;

/// Errors raised while reading or writing site configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize site configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
