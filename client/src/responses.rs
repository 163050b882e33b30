use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::{entity::Entity, Result};

/// Error body returned by the web service on a non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub help: Option<String>,
}

/// One page of search results.
///
/// Items are the raw JSON objects of the searched entity kind, each carrying
/// the service's relevance `score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub created: Option<String>,
    /// Total number of matches across all pages
    pub count: u32,
    pub offset: u32,
    pub items: Vec<Value>,
}

// The result list sits under a per-entity key, e.g. `release-groups`.
#[derive(Debug, Deserialize)]
struct RawSearchPage {
    created: Option<String>,
    #[serde(default)]
    count: u32,
    #[serde(default)]
    offset: u32,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl SearchPage {
    /// Decode a search response body for `entity`.
    pub fn from_json(entity: Entity, body: &str) -> Result<Self> {
        let mut raw: RawSearchPage = serde_json::from_str(body)?;
        let items = match raw.rest.remove(entity.results_key()) {
            Some(items) => serde_json::from_value(items)?,
            None => Vec::new(),
        };
        Ok(Self {
            created: raw.created,
            count: raw.count,
            offset: raw.offset,
            items,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    #[test]
    fn test_decode_release_group_page() {
        let body = r#"{
            "created": "2024-05-01T10:00:00.000Z",
            "count": 2,
            "offset": 0,
            "release-groups": [
                {"id": "72d15666-99a7-321e-b1f3-a3f8c09dff9f", "score": 100, "title": "Revolver"},
                {"id": "9f3c5f1b-6b84-3a7b-a9f3-5e1c3b6d2c10", "score": 61, "title": "Revolver Live"}
            ]
        }"#;
        let page = SearchPage::from_json(Entity::ReleaseGroup, body).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0]["title"], "Revolver");
        assert_eq!(page.created.as_deref(), Some("2024-05-01T10:00:00.000Z"));
    }

    #[test]
    fn test_missing_results_key_is_an_empty_page() {
        let page = SearchPage::from_json(Entity::Artist, r#"{"count": 0, "offset": 0}"#).unwrap();
        assert!(page.is_empty());
        assert!(page.created.is_none());
    }

    #[test]
    fn test_malformed_results_are_rejected() {
        let err = SearchPage::from_json(Entity::Tag, r#"{"count": 1, "tags": "jazz"}"#);
        assert!(matches!(err, Err(ClientError::Json(_))));
    }

    #[test]
    fn test_decode_error_response() {
        let error: ErrorResponse =
            serde_json::from_str(r#"{"error": "Invalid query", "help": "see docs"}"#).unwrap();
        assert_eq!(error.error, "Invalid query");
        assert_eq!(error.help.as_deref(), Some("see docs"));
    }
}
