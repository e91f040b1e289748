use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RollingTextError {
    #[error("Rolling text interval must be greater than zero")]
    InvalidInterval,

    #[error("No tokio runtime available to drive the rolling text timer")]
    NoRuntime,
}
