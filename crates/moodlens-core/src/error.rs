use thiserror::Error;

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised by the pure domain layer: aggregation, export and evaluation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("length mismatch: {texts} texts but {classifications} classifications")]
    LengthMismatch {
        texts: usize,
        classifications: usize,
    },

    #[error("unknown sentiment label: {0}")]
    UnknownLabel(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("invalid score {value:?} on row {row}")]
    InvalidScore { row: usize, value: String },

    #[error("cannot evaluate an empty label set")]
    EmptyEvaluation,
}
