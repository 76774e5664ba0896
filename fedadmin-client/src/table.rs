//! Entity table state
//!
//! The backend exposes no server-side pagination, so a table loads the full
//! collection once and paginates client-side. Both the load and the delete
//! try the entity's primary endpoint first and fall back to the alternate
//! convention on a 404. A successful delete prunes the row locally without a
//! re-fetch, so external writes stay invisible until the next reload.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use shared::response::extract_collection;

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;

/// Rows shown per page
pub const PAGE_SIZE: usize = 10;

/// Endpoint and envelope contract of one entity collection
pub trait TableSource {
    type Row: DeserializeOwned + Clone;

    /// Collection endpoints, primary then alternate
    fn list_endpoints() -> (&'static str, &'static str);

    /// Delete endpoints for an id, primary then alternate
    fn delete_endpoints(id: &str) -> (String, String);

    /// Envelope keys the backend has used for this collection
    fn envelope_keys() -> &'static [&'static str];

    fn row_id(row: &Self::Row) -> &str;
}

/// Loaded collection with client-side pagination
#[derive(Debug)]
pub struct EntityTable<S: TableSource> {
    rows: Vec<S::Row>,
    _source: PhantomData<S>,
}

impl<S: TableSource> Default for EntityTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TableSource> EntityTable<S> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            _source: PhantomData,
        }
    }

    /// Fetch the full collection, falling back to the alternate endpoint on a
    /// 404 from the primary
    pub async fn load(&mut self, client: &ApiClient) -> ClientResult<()> {
        let (primary, alternate) = S::list_endpoints();
        let body = match client.get(primary).await {
            Err(ClientError::NotFound(_)) => {
                tracing::warn!(primary, alternate, "primary list endpoint missing, falling back");
                client.get(alternate).await?
            }
            other => other?,
        };
        self.rows = extract_collection(&body.value, S::envelope_keys())?;
        tracing::debug!(rows = self.rows.len(), "collection loaded");
        Ok(())
    }

    /// Delete by id with the same primary/alternate fallback, then prune the
    /// row from local state
    pub async fn delete(&mut self, client: &ApiClient, id: &str) -> ClientResult<()> {
        let (primary, alternate) = S::delete_endpoints(id);
        match client.delete(&primary).await {
            Err(ClientError::NotFound(_)) => {
                tracing::warn!(%primary, %alternate, "primary delete endpoint missing, falling back");
                client.delete(&alternate).await?;
            }
            other => {
                other?;
            }
        }
        self.rows.retain(|row| S::row_id(row) != id);
        Ok(())
    }

    pub fn rows(&self) -> &[S::Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of the given 1-based page
    pub fn page(&self, page: usize) -> &[S::Row] {
        let start = page.saturating_sub(1) * PAGE_SIZE;
        if start >= self.rows.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.rows.len());
        &self.rows[start..end]
    }

    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(PAGE_SIZE)
    }
}
