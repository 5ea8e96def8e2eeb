use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::text::model::ProcessedText;
use business::domain::text::repository::ProcessedTextRepository;

/// Stand-in used when no database is configured. Stores nothing.
pub struct DisabledProcessedTextRepository;

#[async_trait]
impl ProcessedTextRepository for DisabledProcessedTextRepository {
    async fn save(&self, record: &ProcessedText) -> Result<ProcessedText, RepositoryError> {
        Ok(record.clone())
    }
}
