//! Data models
//!
//! Exchanged with the federation backend verbatim. Records use the backend's
//! camelCase field names; ids are opaque strings assigned server-side.
//! Payload types carry the client-side validation rules applied before any
//! network call.

pub mod event;
pub mod image_ref;
pub mod member;
pub mod news;
pub mod user;

// Re-exports
pub use event::*;
pub use image_ref::*;
pub use member::*;
pub use news::*;
pub use user::*;

use crate::types::Bilingual;
use validator::ValidationError;

/// Minimum trimmed length required on each side of a bilingual field
pub const BILINGUAL_MIN_LEN: usize = 3;

/// Requires both Arabic and English sides, each at least
/// [`BILINGUAL_MIN_LEN`] characters after trimming.
pub fn validate_bilingual(value: &Bilingual) -> Result<(), ValidationError> {
    if value.has_blank_side() {
        return Err(ValidationError::new("bilingual_required"));
    }
    if value.min_len() < BILINGUAL_MIN_LEN {
        return Err(ValidationError::new("bilingual_too_short"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bilingual_validator_rejects_blank_and_short() {
        assert!(validate_bilingual(&Bilingual::new("", "Title")).is_err());
        assert!(validate_bilingual(&Bilingual::new("عن", "On")).is_err());
        assert!(validate_bilingual(&Bilingual::new("عنوان", "Title")).is_ok());
    }
}
