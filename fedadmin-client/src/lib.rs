//! Federation Admin Client - client engine for the federation dashboard
//!
//! Session management, authenticated HTTP with bounded token-refresh retry,
//! route guarding, entity form drafts, and entity table state over the
//! federation's REST backend.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod guard;
pub mod http;
pub mod i18n;
pub mod notify;
pub mod prefs;
pub mod session;
pub mod table;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, FieldErrors};
pub use guard::{Decision, RouteGuard};
pub use http::{ApiClient, FilePart, MultipartFields};
pub use notify::{Notification, NotificationKind};
pub use session::{Session, SessionManager, SessionStore};
pub use table::{EntityTable, PAGE_SIZE, TableSource};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::{Bilingual, Locale};
