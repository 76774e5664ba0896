//! News API

use shared::models::{ChartPoint, News, NewsCategory};
use shared::response::{extract_collection, extract_record};

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::table::TableSource;

pub const NEWS: &str = "news";
pub const NEWS_ALT: &str = "news/all";
pub const CATEGORIES: &str = "news/categories";
pub const CHART_STATS: &str = "news/stats/monthly";

const COLLECTION_KEYS: &[&str] = &["news", "data", "results"];
const RECORD_KEYS: &[&str] = &["news", "data"];

/// News collection contract for [`crate::table::EntityTable`]
pub struct NewsTable;

impl TableSource for NewsTable {
    type Row = News;

    fn list_endpoints() -> (&'static str, &'static str) {
        (NEWS, NEWS_ALT)
    }

    fn delete_endpoints(id: &str) -> (String, String) {
        (format!("{NEWS}/{id}"), format!("{NEWS}/delete/{id}"))
    }

    fn envelope_keys() -> &'static [&'static str] {
        COLLECTION_KEYS
    }

    fn row_id(row: &Self::Row) -> &str {
        &row.id
    }
}

/// Fetch the full article collection
pub async fn list(client: &ApiClient) -> ClientResult<Vec<News>> {
    let body = match client.get(NEWS).await {
        Err(ClientError::NotFound(_)) => client.get(NEWS_ALT).await?,
        other => other?,
    };
    Ok(extract_collection(&body.value, COLLECTION_KEYS)?)
}

/// Fetch one article
pub async fn get(client: &ApiClient, id: &str) -> ClientResult<News> {
    let body = client.get(&format!("{NEWS}/{id}")).await?;
    Ok(extract_record(&body.value, RECORD_KEYS)?)
}

/// Fetch the category lookup
pub async fn categories(client: &ApiClient) -> ClientResult<Vec<NewsCategory>> {
    let body = client.get(CATEGORIES).await?;
    Ok(extract_collection(
        &body.value,
        &["categories", "data", "results"],
    )?)
}

/// Monthly publication counts for the dashboard chart
pub async fn chart_stats(client: &ApiClient) -> ClientResult<Vec<ChartPoint>> {
    let body = client.get(CHART_STATS).await?;
    Ok(extract_collection(&body.value, &["stats", "data", "results"])?)
}

pub(crate) fn record_keys() -> &'static [&'static str] {
    RECORD_KEYS
}
