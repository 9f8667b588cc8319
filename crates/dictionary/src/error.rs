//! Dictionary loading error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("invalid dictionary document: {0}")]
    Parse(#[from] serde_json::Error),
}
