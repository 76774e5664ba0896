//! Users API
//!
//! Account management is JSON-only; avatars are a backend non-feature.

use shared::models::{UserCreate, UserInfo, UserUpdate};
use shared::response::{extract_collection, extract_record};

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::table::TableSource;

pub const USERS: &str = "users";
pub const USERS_ALT: &str = "users/all";

const COLLECTION_KEYS: &[&str] = &["users", "data", "results"];
const RECORD_KEYS: &[&str] = &["user", "data"];

/// User collection contract for [`crate::table::EntityTable`]
pub struct UsersTable;

impl TableSource for UsersTable {
    type Row = UserInfo;

    fn list_endpoints() -> (&'static str, &'static str) {
        (USERS, USERS_ALT)
    }

    fn delete_endpoints(id: &str) -> (String, String) {
        (format!("{USERS}/{id}"), format!("{USERS}/delete/{id}"))
    }

    fn envelope_keys() -> &'static [&'static str] {
        COLLECTION_KEYS
    }

    fn row_id(row: &Self::Row) -> &str {
        &row.id
    }
}

/// Fetch the full account collection
pub async fn list(client: &ApiClient) -> ClientResult<Vec<UserInfo>> {
    let body = match client.get(USERS).await {
        Err(ClientError::NotFound(_)) => client.get(USERS_ALT).await?,
        other => other?,
    };
    Ok(extract_collection(&body.value, COLLECTION_KEYS)?)
}

/// Fetch one account
pub async fn get(client: &ApiClient, id: &str) -> ClientResult<UserInfo> {
    let body = client.get(&format!("{USERS}/{id}")).await?;
    Ok(extract_record(&body.value, RECORD_KEYS)?)
}

/// Create an account
pub async fn add(client: &ApiClient, payload: &UserCreate) -> ClientResult<UserInfo> {
    let body = client.post_json(USERS, payload).await?;
    Ok(extract_record(&body.value, RECORD_KEYS)?)
}

/// Update an account
pub async fn update(client: &ApiClient, id: &str, payload: &UserUpdate) -> ClientResult<UserInfo> {
    let body = client.put_json(&format!("{USERS}/{id}"), payload).await?;
    Ok(extract_record(&body.value, RECORD_KEYS)?)
}
