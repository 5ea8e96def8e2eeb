use async_trait::async_trait;

use super::errors::TextError;
use super::model::{Completion, CompletionRequest};

/// Service port for a single chat-completion call. Implementations never retry.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, TextError>;
}
