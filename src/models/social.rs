use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    Email,
    Phone,
    #[default]
    Username,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
}

impl Platform {
    /// Plataformas por defecto de la búsqueda por identificador
    pub const DEFAULT_SEARCH: [Platform; 3] = [Platform::Facebook, Platform::Instagram, Platform::Twitter];
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaSearch {
    pub identifier: String,
    pub identifier_type: IdentifierType,
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub deep_search: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialProfile {
    pub id: String,
    pub platform: String,
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub profile_url: String,
    pub verified: bool,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub posts: Option<u64>,
    pub last_active: Option<String>,
    pub account_created: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialSearchResult {
    pub search_id: String,
    pub identifier: String,
    pub identifier_type: IdentifierType,
    pub profiles: Vec<SocialProfile>,
    pub total_profiles: u64,
    pub platforms_searched: Vec<String>,
    pub search_time: f64,
    pub confidence: f64,
}
