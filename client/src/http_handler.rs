use crate::error::SearchError;
use crate::models::SearchResults;
use crate::request::SearchRequest;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything observable about a completed HTTP exchange.
#[derive(Debug, Serialize)]
pub struct ResponseDump {
    pub url: String,
    pub status: u16,
    pub reason: Option<String>,
    pub ok: bool,
    pub headers: BTreeMap<String, String>,
    pub elapsed_ms: u64,
    pub body: Value,
}

impl ResponseDump {
    pub fn error_for_status(self) -> Result<Self, SearchError> {
        if self.ok {
            return Ok(self);
        }
        let body = match &self.body {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        Err(SearchError::Status {
            status: self.status,
            body,
        })
    }

    pub fn results(&self) -> Result<SearchResults, SearchError> {
        serde_json::from_value(self.body.clone()).map_err(SearchError::Decode)
    }
}

/// Reusable session for search calls.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http_client: Client,
}

impl SearchClient {
    pub fn new() -> Result<Self, SearchError> {
        let http_client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http_client })
    }

    pub async fn send(&self, search_req: &SearchRequest) -> Result<ResponseDump, SearchError> {
        let prepared = search_req.prepare(&self.http_client)?;
        info!(
            "Searching systems for hostname '{}': {} {}",
            search_req.hostname(),
            prepared.method(),
            prepared.url()
        );

        let started = Instant::now();
        let resp = match self.http_client.execute(prepared).await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Failed to send search request: {:?}", e);
                return Err(e.into());
            }
        };
        info!("Received response from JumpCloud. Status: {}", resp.status());

        let status = resp.status();
        let url = resp.url().to_string();
        let mut headers = BTreeMap::new();
        for (key, value) in resp.headers() {
            headers.insert(key.to_string(), value.to_str().unwrap_or_default().to_string());
        }

        let text = resp.text().await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(e) => {
                if !text.is_empty() {
                    warn!("Response body is not JSON ({}), keeping raw text", e);
                }
                Value::String(text)
            }
        };
        debug!("Response body: {}", body);

        Ok(ResponseDump {
            url,
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            ok: status.is_success(),
            headers,
            elapsed_ms,
            body,
        })
    }

    /// Sends the search and returns the id of the single matching system.
    pub async fn find_id(&self, search_req: &SearchRequest) -> Result<String, SearchError> {
        let dump = self.send(search_req).await?.error_for_status()?;
        let results = dump.results()?;
        info!(
            "Search for '{}' matched {} system(s)",
            search_req.hostname(),
            results.total_count
        );
        results
            .single_id(search_req.hostname())
            .map(str::to_string)
    }
}
