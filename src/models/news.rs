use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Other,
}

/// Request de análisis de una noticia
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Person,
    Location,
    Vehicle,
    Organization,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsEntity {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub value: String,
    /// 0.0 - 1.0
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsMonitorOptions {
    pub sources: Vec<String>,
    pub keywords: Vec<String>,
    /// Minutos entre ejecuciones
    pub interval: u32,
    pub language: Language,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsAnalysisResult {
    pub id: String,
    pub content: String,
    pub entities: Vec<NewsEntity>,
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
    pub analyzed_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorHandle {
    pub monitor_id: String,
}

#[derive(Serialize)]
pub(crate) struct EntitiesRequest<'a> {
    pub content: &'a str,
}
