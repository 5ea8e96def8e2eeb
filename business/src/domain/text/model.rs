use chrono::{DateTime, Utc};

use super::errors::TextError;

/// Longest action label stored with a record, in characters.
pub const MAX_ACTION_LABEL_LEN: usize = 50;

/// One chat-completion call: an optional system instruction and the user's text.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub instruction: Option<String>,
    pub user_text: String,
}

impl CompletionRequest {
    /// Rejects text that is empty once surrounding whitespace is ignored.
    /// The text itself is kept as submitted.
    pub fn new(instruction: Option<String>, user_text: String) -> Result<Self, TextError> {
        if user_text.trim().is_empty() {
            return Err(TextError::EmptyText);
        }

        Ok(Self {
            instruction: instruction.filter(|i| !i.trim().is_empty()),
            user_text,
        })
    }
}

/// Text produced by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

impl Completion {
    pub fn from_raw(raw: &str) -> Self {
        Self {
            text: raw.trim().to_string(),
        }
    }
}

/// Audit record of a successful completion. Insert-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedText {
    /// Assigned by the store; `None` until persisted.
    pub id: Option<i64>,
    pub original_text: String,
    pub processed_text: String,
    pub action_label: String,
    pub created_at: DateTime<Utc>,
}

impl ProcessedText {
    pub fn new(original_text: String, processed_text: String, action_label: &str) -> Self {
        Self {
            id: None,
            original_text,
            processed_text,
            action_label: action_label.chars().take(MAX_ACTION_LABEL_LEN).collect(),
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        original_text: String,
        processed_text: String,
        action_label: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            original_text,
            processed_text,
            action_label,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_create_request_when_text_present() {
        let request = CompletionRequest::new(
            Some("Corrige".to_string()),
            "Je vais au magasins".to_string(),
        )
        .unwrap();

        assert_eq!(request.instruction.as_deref(), Some("Corrige"));
        assert_eq!(request.user_text, "Je vais au magasins");
    }

    #[test]
    fn should_reject_when_text_empty() {
        let result = CompletionRequest::new(None, "".to_string());

        assert!(matches!(result.unwrap_err(), TextError::EmptyText));
    }

    #[test]
    fn should_keep_surrounding_whitespace_of_user_text() {
        let request = CompletionRequest::new(None, "  bonjour \n".to_string()).unwrap();

        assert_eq!(request.user_text, "  bonjour \n");
    }

    #[test]
    fn should_drop_blank_instruction() {
        let request = CompletionRequest::new(Some("   ".to_string()), "texte".to_string()).unwrap();

        assert!(request.instruction.is_none());
    }

    #[test]
    fn should_trim_completion_text() {
        let completion = Completion::from_raw("\n  Je vais au magasin \n");

        assert_eq!(completion.text, "Je vais au magasin");
    }

    #[test]
    fn should_keep_short_label_untouched() {
        let record = ProcessedText::new("a".to_string(), "b".to_string(), "resumer");

        assert_eq!(record.action_label, "resumer");
        assert!(record.id.is_none());
    }

    #[test]
    fn should_truncate_label_to_fifty_characters() {
        let long_label = "é".repeat(80);
        let record = ProcessedText::new("a".to_string(), "b".to_string(), &long_label);

        assert_eq!(record.action_label.chars().count(), MAX_ACTION_LABEL_LEN);
    }

    proptest! {
        #[test]
        fn should_reject_any_whitespace_only_text(text in "[ \t\r\n\u{a0}\u{2003}]{0,32}") {
            let result = CompletionRequest::new(None, text);
            prop_assert!(matches!(result, Err(TextError::EmptyText)));
        }

        #[test]
        fn should_accept_text_with_any_visible_character(
            prefix in "[ \t\n]{0,8}",
            body in "[a-zA-Zàéèç0-9.,!?]{1,40}",
        ) {
            let text = format!("{prefix}{body}");
            let request = CompletionRequest::new(None, text.clone()).unwrap();
            prop_assert_eq!(request.user_text, text);
        }
    }
}
