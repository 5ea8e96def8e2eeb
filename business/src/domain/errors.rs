/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn database_error(detail: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(detail.into())
    }
}
