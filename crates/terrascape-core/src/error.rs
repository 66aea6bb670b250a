use thiserror::Error;

/// Errors raised while loading or validating generator configuration.
///
/// Noise evaluation and mesh emission never fail; only the configuration
/// surface around them does.
#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("Failed to parse terrain config RON: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),

    #[error("Failed to read terrain config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid terrain parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

impl TerrainError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
