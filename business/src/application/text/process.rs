use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::text::errors::TextError;
use crate::domain::text::model::{Completion, CompletionRequest, ProcessedText};
use crate::domain::text::repository::ProcessedTextRepository;
use crate::domain::text::services::CompletionGateway;
use crate::domain::text::use_cases::process::{ProcessTextParams, ProcessTextUseCase};

pub struct ProcessTextUseCaseImpl {
    pub gateway: Arc<dyn CompletionGateway>,
    pub repository: Arc<dyn ProcessedTextRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProcessTextUseCase for ProcessTextUseCaseImpl {
    async fn execute(&self, params: ProcessTextParams) -> Result<Completion, TextError> {
        let action = params.action;
        self.logger.info(&format!(
            "Processing text with action: {} ({} chars)",
            action,
            params.text.chars().count()
        ));

        let request =
            CompletionRequest::new(Some(action.instruction().to_string()), params.text)?;

        let completion = match self.gateway.complete(&request).await {
            Ok(completion) => completion,
            Err(err) => {
                self.logger
                    .warn(&format!("Completion failed for action {}: {}", action, err));
                return Err(err);
            }
        };

        // The completion is returned whatever happens to the audit write.
        let record = ProcessedText::new(request.user_text, completion.text.clone(), action.label());
        match self.repository.save(&record).await {
            Ok(ProcessedText { id: Some(id), .. }) => self.logger.debug(&format!(
                "Processed text stored for action {} (id: {})",
                action, id
            )),
            // Persistence disabled: nothing was written.
            Ok(_) => {}
            Err(err) => self.logger.error(&format!(
                "Failed to store processed text for action {}: {}",
                action, err
            )),
        }

        self.logger
            .info(&format!("Text processed with action: {}", action));
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::text::action::TextAction;
    use mockall::mock;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl CompletionGateway for Gateway {
            async fn complete(&self, request: &CompletionRequest) -> Result<Completion, TextError>;
        }
    }

    mock! {
        pub ProcessedTextRepo {}

        #[async_trait]
        impl ProcessedTextRepository for ProcessedTextRepo {
            async fn save(&self, record: &ProcessedText) -> Result<ProcessedText, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn gateway_returning(text: &'static str) -> MockGateway {
        let mut gateway = MockGateway::new();
        gateway
            .expect_complete()
            .times(1)
            .returning(move |_| Ok(Completion::from_raw(text)));
        gateway
    }

    fn params(action: TextAction, text: &str) -> ProcessTextParams {
        ProcessTextParams {
            action,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_completion_and_store_one_record() {
        let gateway = gateway_returning("Je vais au magasin");

        let mut repo = MockProcessedTextRepo::new();
        repo.expect_save()
            .times(1)
            .withf(|record| {
                record.original_text == "Je vais au magasins"
                    && record.processed_text == "Je vais au magasin"
                    && record.action_label == "corriger"
            })
            .returning(|record| Ok(record.clone()));

        let use_case = ProcessTextUseCaseImpl {
            gateway: Arc::new(gateway),
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(TextAction::Correct, "Je vais au magasins"))
            .await;

        assert_eq!(result.unwrap().text, "Je vais au magasin");
    }

    #[tokio::test]
    async fn should_send_action_instruction_and_raw_text() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_complete()
            .times(1)
            .withf(|request| {
                request.instruction.as_deref() == Some(TextAction::Summarize.instruction())
                    && request.user_text == "  un long texte  "
            })
            .returning(|_| Ok(Completion::from_raw("court")));

        let mut repo = MockProcessedTextRepo::new();
        repo.expect_save()
            .withf(|record| record.action_label == "resumer")
            .returning(|record| Ok(record.clone()));

        let use_case = ProcessTextUseCaseImpl {
            gateway: Arc::new(gateway),
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(TextAction::Summarize, "  un long texte  "))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_blank_text_without_calling_gateway() {
        let mut gateway = MockGateway::new();
        gateway.expect_complete().times(0);
        let mut repo = MockProcessedTextRepo::new();
        repo.expect_save().times(0);

        let use_case = ProcessTextUseCaseImpl {
            gateway: Arc::new(gateway),
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(TextAction::Summarize, " \n\t ")).await;

        assert!(matches!(result.unwrap_err(), TextError::EmptyText));
    }

    #[tokio::test]
    async fn should_return_completion_when_storage_fails() {
        let gateway = gateway_returning("Texte organisé");

        let mut repo = MockProcessedTextRepo::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::database_error("connection refused")));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
            .expect_error()
            .times(1)
            .withf(|message| message.contains("organiser"))
            .returning(|_| ());

        let use_case = ProcessTextUseCaseImpl {
            gateway: Arc::new(gateway),
            repository: Arc::new(repo),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(params(TextAction::Reorganize, "texte en vrac"))
            .await;

        assert_eq!(result.unwrap().text, "Texte organisé");
    }

    #[tokio::test]
    async fn should_log_stored_id_when_record_is_written() {
        let gateway = gateway_returning("Résumé");

        let mut repo = MockProcessedTextRepo::new();
        repo.expect_save().times(1).returning(|record| {
            let mut saved = record.clone();
            saved.id = Some(42);
            Ok(saved)
        });

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_debug()
            .times(1)
            .withf(|message| message.contains("resumer") && message.contains("id: 42"))
            .returning(|_| ());

        let use_case = ProcessTextUseCaseImpl {
            gateway: Arc::new(gateway),
            repository: Arc::new(repo),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(params(TextAction::Summarize, "un long texte"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_log_a_write_when_record_has_no_id() {
        let gateway = gateway_returning("Texte corrigé");

        let mut repo = MockProcessedTextRepo::new();
        repo.expect_save()
            .times(1)
            .returning(|record| Ok(record.clone()));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().times(0);
        logger.expect_error().times(0);

        let use_case = ProcessTextUseCaseImpl {
            gateway: Arc::new(gateway),
            repository: Arc::new(repo),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(params(TextAction::Correct, "texte corigé"))
            .await;

        assert_eq!(result.unwrap().text, "Texte corrigé");
    }

    #[tokio::test]
    async fn should_propagate_gateway_error_without_storing() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_complete()
            .returning(|_| Err(TextError::RateLimited));
        let mut repo = MockProcessedTextRepo::new();
        repo.expect_save().times(0);

        let use_case = ProcessTextUseCaseImpl {
            gateway: Arc::new(gateway),
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(TextAction::Correct, "bonjour"))
            .await;

        assert!(matches!(result.unwrap_err(), TextError::RateLimited));
    }

    #[tokio::test]
    async fn should_keep_upstream_status_unchanged() {
        let mut gateway = MockGateway::new();
        gateway.expect_complete().returning(|_| {
            Err(TextError::Upstream {
                status: 503,
                message: Some("overloaded".to_string()),
            })
        });
        let repo = MockProcessedTextRepo::new();

        let use_case = ProcessTextUseCaseImpl {
            gateway: Arc::new(gateway),
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(TextAction::Reorganize, "bonjour"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            TextError::Upstream { status: 503, .. }
        ));
    }
}
