use thiserror::Error;

/// Unified error type for tridot
#[derive(Error, Debug)]
pub enum TridotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type TridotResult<T> = Result<T, TridotError>;
