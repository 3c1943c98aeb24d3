use thiserror::Error;

use crate::assistant::AssistantError;
use crate::store::StoreError;

/// Top-level error for tracker flows.
///
/// Module-specific errors convert in via `#[from]`; the CLI reduces every
/// variant to a single styled notification line, logging the source for
/// diagnostics only.
#[derive(Debug, Error)]
pub enum NexusError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid record: {0}")]
    Invalid(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
