/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.backend_status: {status}")]
    Backend { status: u16 },
    #[error("repository.search_failed: {reason}")]
    Search { reason: String },
    #[error("repository.not_created: {result}")]
    NotCreated { result: String },
    #[error("repository.transport: {0}")]
    Transport(String),
    #[error("repository.malformed_response: {0}")]
    MalformedResponse(String),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound)
    }

    /// True when the backend answered, but with something other than success.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            RepositoryError::Backend { .. }
                | RepositoryError::Search { .. }
                | RepositoryError::NotCreated { .. }
        )
    }
}
