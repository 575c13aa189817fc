use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::social::IdentifierType;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1d")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "all")]
    All,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkWebSearch {
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<IdentifierType>,
    #[serde(default)]
    pub time_range: TimeRange,
}

impl DarkWebSearch {
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Búsqueda libre por keywords sobre fuentes concretas
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSearch {
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(default)]
    pub time_range: TimeRange,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkWebCategory {
    Forum,
    Marketplace,
    Paste,
    Leak,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DarkWebResult {
    pub id: String,
    pub source: String,
    pub url: String,
    pub title: String,
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub relevance_score: f64,
    pub keywords: Vec<String>,
    pub category: DarkWebCategory,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    #[default]
    Completed,
    Running,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DarkWebSearchResponse {
    pub search_id: String,
    pub query: String,
    pub results: Vec<DarkWebResult>,
    pub total_results: u64,
    pub search_time: f64,
    pub sources_searched: Vec<String>,
    pub status: SearchStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DarkWebMonitor {
    pub id: String,
    pub keywords: Vec<String>,
    pub identifier: Option<String>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub last_run: Option<DateTime<Utc>>,
    pub match_count: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordAction {
    Add,
    Remove,
}

#[derive(Serialize)]
pub(crate) struct KeywordsRequest<'a> {
    pub action: KeywordAction,
    pub keywords: &'a [String],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMonitorRequest {
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// Actualización parcial de un monitor
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_time_range_wire_names() {
        assert_eq!(serde_json::to_value(TimeRange::Day).unwrap(), json!("1d"));
        assert_eq!(serde_json::to_value(TimeRange::All).unwrap(), json!("all"));
        assert_eq!(TimeRange::default(), TimeRange::Month);
    }

    #[test]
    fn test_search_omits_missing_identifier() {
        let body = serde_json::to_value(DarkWebSearch::keywords(["acme leak"])).unwrap();
        assert_eq!(body, json!({ "keywords": ["acme leak"], "timeRange": "30d" }));
    }

    #[test]
    fn test_monitor_update_only_sends_present_fields() {
        let update = MonitorUpdate {
            is_active: Some(false),
            ..MonitorUpdate::default()
        };
        assert_eq!(serde_json::to_value(update).unwrap(), json!({ "isActive": false }));
    }
}
