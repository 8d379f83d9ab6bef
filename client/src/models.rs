use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SearchError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HostnameFilter {
    pub hostname: String,
}

/// Body of a `POST /api/search/systems` call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchBody {
    pub filter: Vec<HostnameFilter>,
}

impl SearchBody {
    pub fn for_hostname(hostname: &str) -> Self {
        Self {
            filter: vec![HostnameFilter {
                hostname: hostname.to_string(),
            }],
        }
    }

    /// The first hostname in the filter, used when reporting lookups.
    pub fn hostname(&self) -> &str {
        self.filter
            .first()
            .map(|f| f.hostname.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchResults {
    #[serde(rename = "totalCount")]
    pub total_count: u64,
    #[serde(default)]
    pub results: Vec<SystemRecord>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SystemRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResults {
    /// Id of the only system matching `hostname`.
    pub fn single_id(&self, hostname: &str) -> Result<&str, SearchError> {
        match (self.total_count, self.results.as_slice()) {
            (1, [record]) => Ok(&record.id),
            (0, _) | (_, []) => Err(SearchError::NotFound {
                hostname: hostname.to_string(),
            }),
            (count, records) => Err(SearchError::Ambiguous {
                hostname: hostname.to_string(),
                count: count.max(records.len() as u64),
            }),
        }
    }
}
