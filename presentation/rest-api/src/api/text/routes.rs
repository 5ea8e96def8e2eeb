use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::text::action::TextAction;
use business::domain::text::use_cases::process::{ProcessTextParams, ProcessTextUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::text::dto::{TextRequest, TextResult};

pub struct TextApi {
    process_use_case: Arc<dyn ProcessTextUseCase>,
}

impl TextApi {
    pub fn new(process_use_case: Arc<dyn ProcessTextUseCase>) -> Self {
        Self { process_use_case }
    }

    async fn process(&self, action: TextAction, request: TextRequest) -> TextResponse {
        let params = ProcessTextParams {
            action,
            text: request.into_text(),
        };

        match self.process_use_case.execute(params).await {
            Ok(completion) => TextResponse::Ok(Json(completion.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => TextResponse::BadRequest(json),
                    408 => TextResponse::RequestTimeout(json),
                    500 => TextResponse::InternalError(json),
                    _ => TextResponse::Upstream(status, json),
                }
            }
        }
    }
}

/// Text transformation API
///
/// Each endpoint forwards the submitted text to the language model with a
/// fixed instruction and returns the model's answer.
#[OpenApi]
impl TextApi {
    /// Correct a text
    ///
    /// Fixes spelling, grammar, conjugation and punctuation while keeping the
    /// original meaning and style.
    #[oai(path = "/corriger", method = "post", tag = "ApiTags::Text")]
    async fn correct(&self, request: TextRequest) -> TextResponse {
        self.process(TextAction::Correct, request).await
    }

    /// Summarize a text
    ///
    /// Produces a summary that is significantly shorter than the original and
    /// keeps its key points.
    #[oai(path = "/resumer", method = "post", tag = "ApiTags::Text")]
    async fn summarize(&self, request: TextRequest) -> TextResponse {
        self.process(TextAction::Summarize, request).await
    }

    /// Reorganize a text
    ///
    /// Restructures and formats the text for readability without adding content.
    #[oai(path = "/organiser", method = "post", tag = "ApiTags::Text")]
    async fn reorganize(&self, request: TextRequest) -> TextResponse {
        self.process(TextAction::Reorganize, request).await
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "bad_form")]
pub enum TextResponse {
    #[oai(status = 200)]
    Ok(Json<TextResult>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 408)]
    RequestTimeout(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    /// Upstream API failure, relayed with its status code
    Upstream(StatusCode, Json<ErrorResponse>),
}

fn bad_form(err: poem::Error) -> TextResponse {
    TextResponse::BadRequest(Json(ErrorResponse::new(format!(
        "Requête invalide: {}",
        err
    ))))
}
