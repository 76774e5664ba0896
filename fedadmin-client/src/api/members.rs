//! Members API
//!
//! The members feature carries the backend's dual endpoint conventions most
//! visibly: `/members/:id` is the primary delete shape, `/members/delete/:id`
//! the alternate one some deployments still serve.

use shared::models::Member;
use shared::response::{extract_collection, extract_record};

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::table::TableSource;

pub const MEMBERS: &str = "members";
pub const MEMBERS_ALT: &str = "members/all";

const COLLECTION_KEYS: &[&str] = &["members", "data", "results"];
const RECORD_KEYS: &[&str] = &["member", "data"];

/// Member collection contract for [`crate::table::EntityTable`]
pub struct MembersTable;

impl TableSource for MembersTable {
    type Row = Member;

    fn list_endpoints() -> (&'static str, &'static str) {
        (MEMBERS, MEMBERS_ALT)
    }

    fn delete_endpoints(id: &str) -> (String, String) {
        (format!("{MEMBERS}/{id}"), format!("{MEMBERS}/delete/{id}"))
    }

    fn envelope_keys() -> &'static [&'static str] {
        COLLECTION_KEYS
    }

    fn row_id(row: &Self::Row) -> &str {
        &row.id
    }
}

/// Fetch the full member collection
pub async fn list(client: &ApiClient) -> ClientResult<Vec<Member>> {
    let body = match client.get(MEMBERS).await {
        Err(ClientError::NotFound(_)) => client.get(MEMBERS_ALT).await?,
        other => other?,
    };
    Ok(extract_collection(&body.value, COLLECTION_KEYS)?)
}

/// Fetch one member
pub async fn get(client: &ApiClient, id: &str) -> ClientResult<Member> {
    let body = client.get(&format!("{MEMBERS}/{id}")).await?;
    Ok(extract_record(&body.value, RECORD_KEYS)?)
}

pub(crate) fn record_keys() -> &'static [&'static str] {
    RECORD_KEYS
}
