//! Generation history: paging, lookup, deletion and audio download.

use crate::client::validation::require_non_empty;
use crate::transport::{HttpTransport, Query, RequestSpec};
use crate::Result;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub history_item_id: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub voice_id: Option<String>,
    #[serde(default)]
    pub voice_name: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub date_unix: Option<i64>,
    #[serde(default)]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub history: Vec<HistoryItem>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub last_history_item_id: Option<String>,
}

/// Filters for [`History::list`]. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryQuery {
    pub page_size: Option<u32>,
    pub start_after_history_item_id: Option<String>,
    pub voice_id: Option<String>,
    pub search: Option<String>,
}

impl HistoryQuery {
    /// Query for the page following `page`, if there is one.
    pub fn after(&self, page: &HistoryPage) -> Option<Self> {
        if !page.has_more {
            return None;
        }
        Some(Self {
            start_after_history_item_id: page.last_history_item_id.clone(),
            ..self.clone()
        })
    }

    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .push_opt("page_size", self.page_size)
            .push_opt("start_after_history_item_id", self.start_after_history_item_id.as_ref())
            .push_opt("voice_id", self.voice_id.as_ref())
            .push_opt("search", self.search.as_ref())
    }
}

/// `/v1/history`.
pub struct History<'a> {
    transport: &'a HttpTransport,
}

impl<'a> History<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub async fn list(&self, query: &HistoryQuery) -> Result<HistoryPage> {
        let spec = RequestSpec::get(&["v1", "history"]).query(query.to_query());
        self.transport.execute_json(spec).await
    }

    pub async fn get(&self, history_item_id: &str) -> Result<HistoryItem> {
        require_non_empty("history_item_id", history_item_id)?;
        self.transport
            .execute_json(RequestSpec::get(&["v1", "history", history_item_id]))
            .await
    }

    pub async fn delete(&self, history_item_id: &str) -> Result<Value> {
        require_non_empty("history_item_id", history_item_id)?;
        self.transport
            .execute(RequestSpec::delete(&["v1", "history", history_item_id]))
            .await?
            .into_json()
    }

    /// Audio of a past generation.
    pub async fn audio(&self, history_item_id: &str) -> Result<Bytes> {
        require_non_empty("history_item_id", history_item_id)?;
        self.transport
            .execute_bytes(RequestSpec::get(&["v1", "history", history_item_id, "audio"]))
            .await
    }
}
