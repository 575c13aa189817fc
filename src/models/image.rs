use serde::{Deserialize, Serialize};

use crate::services::transport::UploadFile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    Yandex,
    Tineye,
}

/// Búsqueda inversa: por URL o por archivo (uno de los dos es obligatorio)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip)]
    pub image_file: Option<UploadFile>,
    pub engines: Vec<SearchEngine>,
}

impl ImageSearch {
    pub fn by_url(image_url: impl Into<String>, engines: &[SearchEngine]) -> Self {
        Self {
            image_url: Some(image_url.into()),
            image_file: None,
            engines: engines_or_default(engines),
        }
    }

    pub fn by_file(file: UploadFile, engines: &[SearchEngine]) -> Self {
        Self {
            image_url: None,
            image_file: Some(file),
            engines: engines_or_default(engines),
        }
    }
}

/// Sin motores explícitos se busca en Google
fn engines_or_default(engines: &[SearchEngine]) -> Vec<SearchEngine> {
    if engines.is_empty() {
        vec![SearchEngine::default()]
    } else {
        engines.to_vec()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageSearchResult {
    pub id: String,
    pub engine: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub similarity: f64,
    pub source_url: String,
    pub dimensions: Dimensions,
    pub file_size: Option<u64>,
    pub format: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageSearchResponse {
    pub search_id: String,
    pub results: Vec<ImageSearchResult>,
    pub total_results: u64,
    /// Segundos
    pub search_time: f64,
    pub engines: Vec<String>,
}
