//! Entity form drafts
//!
//! Draft state for the create/edit forms. A draft is seeded from an existing
//! record (edit) or starts blank (create); `validate()` produces the inline
//! per-field messages and a failing draft never reaches the network. Submit
//! serializes to multipart form data because image attachments are optional
//! on every entity, POSTs on create and PUTs on update keyed by id presence,
//! and reports the list route to navigate back to.

pub mod event;
pub mod member;
pub mod news;
pub mod user;

pub use event::EventForm;
pub use member::MemberForm;
pub use news::NewsForm;
pub use user::UserForm;

use crate::http::FilePart;

/// Create vs edit, keyed by id presence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// The record id, in edit mode
    pub fn id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

/// A file picked in the form, staged until submit
#[derive(Debug, Clone)]
pub struct StagedImage {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl StagedImage {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub(crate) fn into_part(self, field: &str) -> FilePart {
        FilePart {
            field: field.to_string(),
            file_name: self.file_name,
            mime: self.mime,
            bytes: self.bytes,
        }
    }
}
