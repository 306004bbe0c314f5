//! Error types for the fallible edges of the map (text parsing, export).

use thiserror::Error;

/// Errors raised when user-supplied text names something outside the map,
/// or when an export fails.
#[derive(Debug, Error)]
pub enum DepMapError {
    #[error("unknown category '{0}' (expected one of: core, mt5, news, trading, config, monitoring)")]
    UnknownCategory(String),

    #[error("unknown item type '{0}'")]
    UnknownItemType(String),

    #[error("unknown output format '{0}' (expected text, markdown or json)")]
    UnknownFormat(String),

    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
}
