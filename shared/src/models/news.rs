//! News Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::image_ref::ImageRef;
use super::validate_bilingual;
use crate::types::Bilingual;

/// News article entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: String,
    pub title: Bilingual,
    pub content: Bilingual,
    pub category: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// News payload sent on create (POST) and update (PUT)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewsPayload {
    #[validate(custom(function = "validate_bilingual"))]
    pub title: Bilingual,
    #[validate(custom(function = "validate_bilingual"))]
    pub content: Bilingual,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
}

/// News category (backend-managed lookup)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsCategory {
    pub id: String,
    pub name: Bilingual,
}

/// Monthly publication count for the dashboard chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: String,
    pub count: u64,
}
