use std::sync::Arc;

use sqlx::PgPool;

use logger::TracingLogger;
use persistence::processed_text::disabled::DisabledProcessedTextRepository;
use persistence::processed_text::repository::ProcessedTextRepositoryPostgres;

use openai::client::OpenAIClient;
use openai::completion_gateway::CompletionGatewayOpenAI;

use business::application::text::process::ProcessTextUseCaseImpl;
use business::domain::text::repository::ProcessedTextRepository;

use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub page_api: crate::api::page::routes::PageApi,
    pub text_api: crate::api::text::routes::TextApi,
}

impl DependencyContainer {
    /// Wires the adapters. Persistence is enabled only when a pool is given.
    pub fn new(openai_config: &OpenAIConfig, pool: Option<PgPool>) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let openai_client =
            OpenAIClient::new(openai_config.api_key.clone(), openai_config.timeout)
                .with_base_url(openai_config.base_url.clone())
                .with_model(openai_config.model.clone());
        let ai_configured = openai_client.api_key().is_some();
        if !ai_configured {
            tracing::warn!("OPENAI_API_KEY missing or placeholder, text endpoints will answer 400");
        }
        let gateway = Arc::new(CompletionGatewayOpenAI::new(openai_client));

        let persistence_enabled = pool.is_some();
        let repository: Arc<dyn ProcessedTextRepository> = match pool {
            Some(pool) => Arc::new(ProcessedTextRepositoryPostgres::new(pool)),
            None => {
                tracing::info!("DATABASE_URL not set, processed texts will not be stored");
                Arc::new(DisabledProcessedTextRepository)
            }
        };

        // Text use cases
        let process_use_case = Arc::new(ProcessTextUseCaseImpl {
            gateway,
            repository,
            logger,
        });

        Self {
            health_api: crate::api::health::routes::Api::new(ai_configured, persistence_enabled),
            page_api: crate::api::page::routes::PageApi,
            text_api: crate::api::text::routes::TextApi::new(process_use_case),
        }
    }
}
