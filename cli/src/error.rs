//! CLI errors

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line tool
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("machine configuration rejected: {0}")]
    Machine(#[from] enigma_core::Error),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
