use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::text::model::ProcessedText;

#[derive(Debug, FromRow)]
pub struct ProcessedTextEntity {
    pub id: i64,
    pub original_text: String,
    pub processed_text: String,
    pub action_label: String,
    pub created_at: DateTime<Utc>,
}

impl ProcessedTextEntity {
    pub fn into_domain(self) -> ProcessedText {
        ProcessedText::from_repository(
            self.id,
            self.original_text,
            self.processed_text,
            self.action_label,
            self.created_at,
        )
    }
}
