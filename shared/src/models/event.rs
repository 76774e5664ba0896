//! Event Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::image_ref::ImageRef;
use super::validate_bilingual;
use crate::types::Bilingual;

/// Federation event entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: Bilingual,
    pub description: Bilingual,
    pub location: Bilingual,
    pub date: Option<DateTime<Utc>>,
    pub image: Option<ImageRef>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Event payload sent on create (POST) and update (PUT)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventPayload {
    #[validate(custom(function = "validate_bilingual"))]
    pub title: Bilingual,
    #[validate(custom(function = "validate_bilingual"))]
    pub description: Bilingual,
    #[validate(custom(function = "validate_bilingual"))]
    pub location: Bilingual,
    pub date: Option<DateTime<Utc>>,
}
