//! Notification input configuration.
//!
//! All inputs are passed in explicitly so the core formatting logic stays
//! free of ambient environment lookups and remains trivially testable.
use secrecy::SecretString;

use crate::error::{HeraldError, Result};

/// Inputs required to assemble one build notification.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Telegram bot API token. Inserted verbatim into the request URL path.
    pub token: SecretString,
    /// Free-form commit message text. May contain any Unicode text,
    /// including MarkdownV2 reserved characters.
    pub commit_message: String,
    /// Web UI link to the commit.
    pub commit_url: String,
    /// Full commit hash.
    pub commit_id: String,
}

impl NotifyConfig {
    /// Validate and construct notification inputs.
    ///
    /// Every input is required. An absent or empty value fails fast rather
    /// than degrading into a malformed caption or URL downstream.
    pub fn new(
        token: String,
        commit_message: String,
        commit_url: String,
        commit_id: String,
    ) -> Result<Self> {
        if token.is_empty() {
            return Err(HeraldError::missing_input("bot token"));
        }

        if commit_message.is_empty() {
            return Err(HeraldError::missing_input("commit message"));
        }

        if commit_url.is_empty() {
            return Err(HeraldError::missing_input("commit url"));
        }

        if commit_id.is_empty() {
            return Err(HeraldError::missing_input("commit id"));
        }

        Ok(Self {
            token: SecretString::from(token),
            commit_message,
            commit_url,
            commit_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> (String, String, String, String) {
        (
            "123456:bot-token".into(),
            "fix: everything".into(),
            "https://example.com/commit/abcdef1".into(),
            "abcdef1234567".into(),
        )
    }

    #[test]
    fn accepts_complete_inputs() {
        let (token, message, url, id) = inputs();
        let result = NotifyConfig::new(token, message, url, id);
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_empty_token() {
        let (_, message, url, id) = inputs();
        let result = NotifyConfig::new("".into(), message, url, id);
        assert!(matches!(result, Err(HeraldError::MissingInput("bot token"))));
    }

    #[test]
    fn rejects_empty_commit_message() {
        let (token, _, url, id) = inputs();
        let result = NotifyConfig::new(token, "".into(), url, id);
        assert!(matches!(
            result,
            Err(HeraldError::MissingInput("commit message"))
        ));
    }

    #[test]
    fn rejects_empty_commit_url() {
        let (token, message, _, id) = inputs();
        let result = NotifyConfig::new(token, message, "".into(), id);
        assert!(matches!(
            result,
            Err(HeraldError::MissingInput("commit url"))
        ));
    }

    #[test]
    fn rejects_empty_commit_id() {
        let (token, message, url, _) = inputs();
        let result = NotifyConfig::new(token, message, url, "".into());
        assert!(matches!(result, Err(HeraldError::MissingInput("commit id"))));
    }
}
