//! Member Model
//!
//! Board and staff members shown on the federation's public pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::image_ref::ImageRef;
use super::validate_bilingual;
use crate::types::Bilingual;

/// Member grouping on the public site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberCategory {
    Board,
    Staff,
}

impl MemberCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberCategory::Board => "board",
            MemberCategory::Staff => "staff",
        }
    }
}

impl std::fmt::Display for MemberCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Staff/board member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: Bilingual,
    pub position: Bilingual,
    pub category: MemberCategory,
    /// Display ordering on the public page, lowest first
    #[serde(default)]
    pub order: i64,
    pub image: Option<ImageRef>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Member payload sent on create (POST) and update (PUT)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberPayload {
    #[validate(custom(function = "validate_bilingual"))]
    pub name: Bilingual,
    #[validate(custom(function = "validate_bilingual"))]
    pub position: Bilingual,
    pub category: MemberCategory,
    pub order: i64,
}
