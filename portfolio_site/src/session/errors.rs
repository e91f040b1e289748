use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from utils operations, including random source failures
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
