use thiserror::Error;

/// Failures of the project list pipeline and the chat assistant.
///
/// None of these are fatal: every variant has a degraded fallback at the
/// call site (error row, fallback tags, canned reply).
#[derive(Error, Debug)]
pub enum FolioError {
    /// Repository listing could not be fetched or parsed
    #[error("repository listing unavailable: {0}")]
    ListingUnavailable(String),

    /// No README-like document could be read for a repository
    #[error("no readable document for {repo}: {reason}")]
    EnrichmentUnavailable { repo: String, reason: String },

    /// Chat backend failed to answer
    #[error("chat backend unavailable: {0}")]
    BackendUnavailable(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
