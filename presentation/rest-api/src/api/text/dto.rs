use poem_openapi::payload::Form;
use poem_openapi::{ApiRequest, Multipart, Object};
use serde::Deserialize;

use business::domain::text::model::Completion;

/// Form submitted by the landing page.
#[derive(Debug, Clone, Deserialize, Object)]
pub struct TextForm {
    /// Text to transform (cannot be empty)
    pub text: String,
}

/// Same field sent as `multipart/form-data`.
#[derive(Debug, Multipart)]
pub struct TextMultipart {
    /// Text to transform (cannot be empty)
    pub text: String,
}

/// Text submission, accepted as url-encoded or multipart form data.
#[derive(Debug, ApiRequest)]
pub enum TextRequest {
    Form(Form<TextForm>),
    Multipart(TextMultipart),
}

impl TextRequest {
    pub fn into_text(self) -> String {
        match self {
            TextRequest::Form(form) => form.0.text,
            TextRequest::Multipart(multipart) => multipart.text,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TextResult {
    /// Transformed text
    pub text: String,
}

impl From<Completion> for TextResult {
    fn from(completion: Completion) -> Self {
        Self {
            text: completion.text,
        }
    }
}
