//! Engine error type.

use sr_network::IngestionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The feed failed validation.  The previously active version is still
    /// being served.
    #[error("ingestion rejected: {0}")]
    Ingestion(#[from] IngestionError),

    /// The active-version handle can no longer be read or replaced.  Not
    /// retried here; callers decide whether to rebuild the engine.
    #[error("route store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("feed parse error: {0}")]
    Feed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
