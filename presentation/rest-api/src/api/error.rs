use std::any::Any;

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Human-readable explanation
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Turns a handler panic into a 500 with a JSON `detail`.
pub fn panic_response(
    err: Box<dyn Any + Send + 'static>,
) -> (StatusCode, poem::web::Json<serde_json::Value>) {
    let description = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic".to_string());

    tracing::error!(error = %description, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        poem::web::Json(serde_json::json!({
            "detail": format!("Erreur interne du serveur: {}", description)
        })),
    )
}
