use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::text::errors::TextError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for TextError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, detail) = match self {
            TextError::EmptyText => (
                StatusCode::BAD_REQUEST,
                "Le texte ne peut pas être vide".to_string(),
            ),
            TextError::MissingApiKey => (
                StatusCode::BAD_REQUEST,
                "Clé API OpenAI manquante. Veuillez configurer votre clé API OpenAI pour utiliser les fonctionnalités IA.".to_string(),
            ),
            TextError::InvalidApiKey => (
                StatusCode::BAD_REQUEST,
                "Clé API OpenAI invalide. Veuillez vérifier votre clé API.".to_string(),
            ),
            TextError::RateLimited => (
                StatusCode::BAD_REQUEST,
                "Limite de requêtes atteinte. Votre clé API OpenAI a épuisé son quota ou ses crédits. Vérifiez votre compte OpenAI ou attendez avant de réessayer.".to_string(),
            ),
            TextError::QuotaExhausted => (
                StatusCode::BAD_REQUEST,
                "Quota épuisé. Votre clé API OpenAI n'a plus de crédit. Ajoutez du crédit à votre compte OpenAI.".to_string(),
            ),
            TextError::Upstream { status, message } => {
                let mut detail = format!("Erreur API OpenAI (Code {})", status);
                if let Some(message) = message {
                    detail.push_str(": ");
                    detail.push_str(&message);
                }
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                    detail,
                )
            }
            TextError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "Timeout lors de l'appel à l'API OpenAI".to_string(),
            ),
            TextError::Unexpected(cause) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Erreur lors du traitement: {}", cause),
            ),
        };

        (status, Json(ErrorResponse::new(detail)))
    }
}
