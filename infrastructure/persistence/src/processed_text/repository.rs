use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::text::model::ProcessedText;
use business::domain::text::repository::ProcessedTextRepository;

use super::entity::ProcessedTextEntity;

const INSERT_PROCESSED_TEXT: &str = r#"INSERT INTO processed_texts (original_text, processed_text, action_label, created_at)
    VALUES ($1, $2, $3, $4)
    RETURNING id, original_text, processed_text, action_label, created_at"#;

pub struct ProcessedTextRepositoryPostgres {
    pool: PgPool,
}

impl ProcessedTextRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProcessedTextRepository for ProcessedTextRepositoryPostgres {
    async fn save(&self, record: &ProcessedText) -> Result<ProcessedText, RepositoryError> {
        // The connection goes back to the pool as soon as the insert commits.
        let entity = sqlx::query_as::<_, ProcessedTextEntity>(INSERT_PROCESSED_TEXT)
        .bind(&record.original_text)
        .bind(&record.processed_text)
        .bind(&record.action_label)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::database_error(e.to_string()))?;

        tracing::debug!(id = entity.id, label = %entity.action_label, "processed text inserted");
        Ok(entity.into_domain())
    }
}
