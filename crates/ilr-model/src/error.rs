use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid severity: {0:?} (expected F, E or W)")]
    InvalidSeverity(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
