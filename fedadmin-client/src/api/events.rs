//! Events API

use shared::models::Event;
use shared::response::{extract_collection, extract_record};

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::table::TableSource;

pub const EVENTS: &str = "events";
pub const EVENTS_ALT: &str = "events/all";

const COLLECTION_KEYS: &[&str] = &["events", "data", "results"];
const RECORD_KEYS: &[&str] = &["event", "data"];

/// Event collection contract for [`crate::table::EntityTable`]
pub struct EventsTable;

impl TableSource for EventsTable {
    type Row = Event;

    fn list_endpoints() -> (&'static str, &'static str) {
        (EVENTS, EVENTS_ALT)
    }

    fn delete_endpoints(id: &str) -> (String, String) {
        (format!("{EVENTS}/{id}"), format!("{EVENTS}/delete/{id}"))
    }

    fn envelope_keys() -> &'static [&'static str] {
        COLLECTION_KEYS
    }

    fn row_id(row: &Self::Row) -> &str {
        &row.id
    }
}

/// Fetch the full event collection
pub async fn list(client: &ApiClient) -> ClientResult<Vec<Event>> {
    let body = match client.get(EVENTS).await {
        Err(ClientError::NotFound(_)) => client.get(EVENTS_ALT).await?,
        other => other?,
    };
    Ok(extract_collection(&body.value, COLLECTION_KEYS)?)
}

/// Fetch one event
pub async fn get(client: &ApiClient, id: &str) -> ClientResult<Event> {
    let body = client.get(&format!("{EVENTS}/{id}")).await?;
    Ok(extract_record(&body.value, RECORD_KEYS)?)
}

pub(crate) fn record_keys() -> &'static [&'static str] {
    RECORD_KEYS
}
