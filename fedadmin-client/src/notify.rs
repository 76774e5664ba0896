//! User notifications
//!
//! Errors caught at a component boundary become a transient toast with a
//! localized title/description pair. Raw server payloads never reach the
//! user; only the carried message strings do.

use shared::Locale;

use crate::error::ClientError;
use crate::i18n::translate;

/// Toast flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient toast
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Localized success toast for a saved record
    pub fn saved(locale: Locale) -> Self {
        Self::success(
            translate(locale, "notify.saved.title"),
            translate(locale, "notify.saved.body"),
        )
    }

    /// Localized success toast for a deleted record
    pub fn deleted(locale: Locale) -> Self {
        Self::success(
            translate(locale, "notify.deleted.title"),
            translate(locale, "notify.deleted.body"),
        )
    }

    /// Map a client error to its user-facing toast
    pub fn from_error(locale: Locale, error: &ClientError) -> Self {
        let (title_key, description) = match error {
            ClientError::Http(_) => (
                "error.network.title",
                translate(locale, "error.network.body").to_string(),
            ),
            ClientError::Unauthorized => (
                "error.unauthorized.title",
                translate(locale, "error.unauthorized.body").to_string(),
            ),
            ClientError::RequestFailed { message } => ("error.request.title", message.clone()),
            ClientError::NotFound(_) => (
                "error.notfound.title",
                translate(locale, "error.notfound.body").to_string(),
            ),
            ClientError::Validation(fields) => {
                let mut lines: Vec<String> = fields
                    .iter()
                    .map(|(field, message)| format!("{field}: {message}"))
                    .collect();
                lines.sort();
                ("error.validation.title", lines.join("\n"))
            }
            ClientError::InvalidResponse(_)
            | ClientError::Serialization(_)
            | ClientError::Storage(_) => (
                "error.response.title",
                translate(locale, "error.response.body").to_string(),
            ),
        };

        Self {
            kind: NotificationKind::Error,
            title: translate(locale, title_key).to_string(),
            description,
        }
    }
}
