//! Status messages shown after a signup or removal attempt.

use crate::i18n::{Language, TextKey, resolve};

/// How long a status message stays visible.
pub const MESSAGE_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS class for the message area.
    pub const fn class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Message text, either from the backend or from the string tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageText {
    Backend(String),
    Local(TextKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiMessage {
    pub text: MessageText,
    pub severity: Severity,
}

impl UiMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: MessageText::Backend(text.into()),
            severity: Severity::Success,
        }
    }

    pub fn backend_error(text: impl Into<String>) -> Self {
        Self {
            text: MessageText::Backend(text.into()),
            severity: Severity::Error,
        }
    }

    pub fn local_error(key: TextKey) -> Self {
        Self {
            text: MessageText::Local(key),
            severity: Severity::Error,
        }
    }

    /// Text to display in `language`.
    pub fn render(&self, language: Language) -> String {
        match &self.text {
            MessageText::Backend(text) => text.clone(),
            MessageText::Local(key) => resolve(language, *key).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_text_ignores_language() {
        let msg = UiMessage::success("Signed up!");
        assert_eq!(msg.render(Language::En), "Signed up!");
        assert_eq!(msg.render(Language::Pt), "Signed up!");
        assert_eq!(msg.severity.class(), "success");
    }

    #[test]
    fn test_local_text_follows_language() {
        let msg = UiMessage::local_error(TextKey::FailedToSignUp);
        assert_eq!(msg.render(Language::En), "Failed to sign up. Please try again.");
        assert_eq!(
            msg.render(Language::Pt),
            "Falha ao inscrever. Por favor, tente novamente."
        );
        assert_eq!(msg.severity.class(), "error");
    }
}
