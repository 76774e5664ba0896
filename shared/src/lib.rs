//! Shared types for the federation admin dashboard
//!
//! Wire models and response-envelope contract exchanged with the federation
//! backend. These types are shared between the dashboard client and tests.

pub mod models;
pub mod response;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{ApiBody, EnvelopeError, extract_collection, extract_record};
pub use types::{Bilingual, Locale, Timestamp};
