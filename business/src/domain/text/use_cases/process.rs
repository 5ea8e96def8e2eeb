use async_trait::async_trait;

use crate::domain::text::action::TextAction;
use crate::domain::text::errors::TextError;
use crate::domain::text::model::Completion;

pub struct ProcessTextParams {
    pub action: TextAction,
    pub text: String,
}

#[async_trait]
pub trait ProcessTextUseCase: Send + Sync {
    async fn execute(&self, params: ProcessTextParams) -> Result<Completion, TextError>;
}
