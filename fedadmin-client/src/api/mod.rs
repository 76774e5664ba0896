//! Typed endpoint modules
//!
//! One module per backend feature. Each declares its endpoint pair and the
//! envelope keys the backend has shipped for it, and funnels everything
//! through [`crate::http::ApiClient`].

pub mod auth;
pub mod events;
pub mod members;
pub mod news;
pub mod users;
