use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ProcessedText;

/// Append-only audit log of successful completions.
#[async_trait]
pub trait ProcessedTextRepository: Send + Sync {
    /// Stores the record and returns it with its assigned id, when the store assigns one.
    async fn save(&self, record: &ProcessedText) -> Result<ProcessedText, RepositoryError>;
}
