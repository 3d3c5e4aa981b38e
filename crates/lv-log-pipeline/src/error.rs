//! Retrieval error types.

use thiserror::Error;

/// Failures that can reach the pipeline's catch-all boundary.
///
/// Per-line parse failures and bad time bounds never become `Err`
/// values — they degrade in place (empty record fields, defaulted
/// bounds) so one bad input cannot sink a whole retrieval.
#[derive(Debug, Error)]
pub enum RetrieveError {
    #[error("log store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("unknown log category '{0}'")]
    UnknownCategory(String),
}

/// Convenience alias for pipeline-internal results.
pub type PipelineResult<T> = Result<T, RetrieveError>;
