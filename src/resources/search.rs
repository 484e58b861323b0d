use crate::endpoint::END_SEARCH;
use crate::error::{KankaError, Result, ResultExt};
use crate::response::List;
use crate::rest::RestContext;
use crate::service::Service;
use crate::time::Time;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Characters left unescaped in the query path segment
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A lightweight summary of an entity matching a search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub id: i64,
    pub entity_id: i64,
    pub name: String,
    /// Resource kind, e.g. "character" or "location"
    #[serde(rename = "type")]
    pub kind: String,
    pub image: Option<String>,
    pub is_private: bool,
    /// HTML preview shown on hover
    pub tooltip: Option<String>,
    /// Page of the entity on kanka.io
    pub url: Option<String>,
    pub created_at: Option<Time>,
    pub created_by: Option<i64>,
    pub updated_at: Option<Time>,
    pub updated_by: Option<i64>,
}

/// Campaign-wide free-text search
#[derive(Debug, Clone)]
pub struct SearchService {
    svc: Service,
}

impl SearchService {
    pub(crate) fn new(rest: Arc<RestContext>) -> Self {
        SearchService {
            svc: Service::new(rest, END_SEARCH, "Search"),
        }
    }

    /// Find the entities of a campaign whose name matches `query`
    pub fn search(
        &self,
        camp_id: i64,
        query: &str,
        sync: Option<&Time>,
    ) -> Result<List<SearchResult>> {
        self.search_inner(camp_id, query, sync)
            .context(|| format!("cannot search Campaign (ID: {}) for {:?}", camp_id, query))
    }

    fn search_inner(
        &self,
        camp_id: i64,
        query: &str,
        sync: Option<&Time>,
    ) -> Result<List<SearchResult>> {
        if query.is_empty() {
            return Err(KankaError::InvalidArgument("search query is empty".to_string()));
        }

        let encoded = utf8_percent_encode(query, QUERY_ENCODE_SET);
        let base = self.svc.campaign(camp_id).map(|end| end.append(&format!("/{}", encoded)));

        self.svc.list(base, sync)
    }
}
