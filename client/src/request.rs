use crate::error::SearchError;
use crate::models::SearchBody;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use std::fmt;
use url::Url;

pub const DEFAULT_SEARCH_URL: &str = "https://console.jumpcloud.com/api/search/systems/";
pub const DEFAULT_HOSTNAME: &str = "ip-192-168-1-199";
pub const PLACEHOLDER_API_KEY: &str = "key";

const START_MARKER: &str = "-----------START-----------";

/// A fully described search call: method, URL, ordered headers and the
/// serialized body.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    method: Method,
    url: Url,
    headers: Vec<(String, String)>,
    body: String,
    hostname: String,
}

impl SearchRequest {
    pub fn new(url: &str, api_key: &str, body: &SearchBody) -> Result<Self, SearchError> {
        let url = parse_search_url(url)?;
        let host = host_header_value(&url)?;
        let body_text = serde_json::to_string(body).map_err(SearchError::Serialize)?;

        let headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Host".to_string(), host),
            ("x-api-key".to_string(), api_key.to_string()),
        ];

        Ok(Self {
            method: Method::POST,
            url,
            headers,
            body: body_text,
            hostname: body.hostname().to_string(),
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Hostname the request filters on.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Builds the transmittable request without sending it.
    pub fn prepare(&self, http_client: &Client) -> Result<reqwest::Request, SearchError> {
        let mut header_map = HeaderMap::with_capacity(self.headers.len());
        for (key, value) in &self.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| SearchError::InvalidHeader { name: key.clone() })?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| SearchError::InvalidHeader { name: key.clone() })?;
            header_map.insert(name, value);
        }

        let request = http_client
            .request(self.method.clone(), self.url.clone())
            .headers(header_map)
            .body(self.body.clone())
            .build()?;
        Ok(request)
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self
            .headers
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("\n");
        write!(
            f,
            "{}\n{} {}\n{}\n\n{}",
            START_MARKER, self.method, self.url, headers, self.body
        )
    }
}

fn parse_search_url(raw: &str) -> Result<Url, SearchError> {
    let invalid = |reason: String| SearchError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid("the URL must start with 'http://' or 'https://'".into()));
    }
    Ok(url)
}

fn host_header_value(url: &Url) -> Result<String, SearchError> {
    let host = url.host_str().ok_or_else(|| SearchError::InvalidUrl {
        url: url.to_string(),
        reason: "no host".into(),
    })?;
    // `port()` is only set when it differs from the scheme default.
    Ok(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
