use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompassError {
    #[error("Persistence error: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding failed: {0}")]
    Encode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CompassError>;
