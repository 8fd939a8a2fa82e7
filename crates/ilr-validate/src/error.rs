use std::path::PathBuf;

use ilr_reference::ReferenceError;

#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("rule {rule} requires the {service} service, which was not provided")]
    MissingService {
        rule: &'static str,
        service: &'static str,
    },

    #[error("unknown rule {name:?} in {field}")]
    UnknownRule { name: String, field: &'static str },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid severity {value:?} for rule {rule}")]
    InvalidSeverity { rule: String, value: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("failed to load rules from {path}: {message}")]
    RuleLoad { path: PathBuf, message: String },
}

impl ValidateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;
