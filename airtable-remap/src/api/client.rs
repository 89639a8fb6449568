//! HTTP client for the Airtable metadata and record APIs

use log::debug;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::models::{ListRecordsResponse, ListTablesResponse, Record, Table};

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.airtable.com/v0";

/// Records fetched per page; 100 is the API maximum
const PAGE_SIZE: &str = "100";

/// Bearer-authorized client over the Airtable v0 API.
///
/// Wraps a single shared `reqwest::Client`. All calls are sequential and
/// unretried; the first failure surfaces as an [`ApiError`] and aborts the
/// caller's run.
pub struct AirtableClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AirtableClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a non-default endpoint. Used by tests and proxies.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// List all tables of a base, in the order the metadata API returns them,
    /// each with its current field list.
    pub async fn list_tables(&self, base_id: &str) -> Result<Vec<Table>, ApiError> {
        let resource = format!("meta/bases/{base_id}/tables");
        let response: ListTablesResponse = self.get_json(&resource, &[]).await?;
        debug!("Found {} tables for base {}", response.tables.len(), base_id);
        Ok(response.tables)
    }

    /// List every record of a table, following the `offset` cursor until the
    /// API stops returning one. The result is complete or the call fails;
    /// no partial page set is ever returned.
    pub async fn list_records(
        &self,
        base_id: &str,
        table_id: &str,
    ) -> Result<Vec<Record>, ApiError> {
        let resource = format!("{base_id}/{table_id}");
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut query = vec![("pageSize", PAGE_SIZE)];
            if let Some(cursor) = offset.as_deref() {
                query.push(("offset", cursor));
            }

            let page: ListRecordsResponse = self.get_json(&resource, &query).await?;
            records.extend(page.records);

            match page.offset {
                Some(cursor) => offset = Some(cursor),
                None => break,
            }
        }

        debug!(
            "Fetched {} records from table {} in base {}",
            records.len(),
            table_id,
            base_id
        );
        Ok(records)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, resource);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_status(status.as_u16(), resource, &body))
    }
}

/// Map a non-success status to the matching [`ApiError`] variant, carrying
/// the requested resource and whatever message the error body held.
fn map_status(status: u16, resource: &str, body: &str) -> ApiError {
    let message = error_message(body);
    match status {
        401 | 403 => ApiError::Authentication {
            resource: resource.to_string(),
            message,
        },
        404 => ApiError::NotFound {
            resource: resource.to_string(),
        },
        status => ApiError::Api {
            resource: resource.to_string(),
            status,
            message,
        },
    }
}

/// Pull the human-readable message out of an Airtable error body,
/// `{"error": {"type": "...", "message": "..."}}`, falling back to the raw
/// body when it does not match that shape.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            let error = value.get("error")?;
            match error {
                serde_json::Value::String(s) => Some(s.clone()),
                _ => error
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string),
            }
        })
        .unwrap_or_else(|| body.to_string())
}
