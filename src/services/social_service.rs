use crate::error::ApiError;
use crate::models::{
    Ack, ApiResponse, IdentifierType, Platform, SocialMediaSearch, SocialProfile,
    SocialSearchResult,
};
use crate::services::api_client::ApiClient;
use crate::utils::endpoints::social;
use crate::utils::path_segment;

#[derive(Clone)]
pub struct SocialService {
    client: ApiClient,
}

impl SocialService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Scraping de perfiles en las plataformas pedidas
    pub async fn scrape_profiles(
        &self,
        request: &SocialMediaSearch,
    ) -> Result<ApiResponse<SocialSearchResult>, ApiError> {
        self.client.post(social::SCRAPE, request).await
    }

    pub async fn get_profile_details(
        &self,
        profile_id: &str,
    ) -> Result<ApiResponse<SocialProfile>, ApiError> {
        self.client
            .get(&format!("{}/{}", social::PROFILES, path_segment(profile_id)))
            .await
    }

    /// Búsqueda completa (incluye `deep_search`)
    pub async fn search(
        &self,
        request: &SocialMediaSearch,
    ) -> Result<ApiResponse<SocialSearchResult>, ApiError> {
        self.client.post(social::SEARCH, request).await
    }

    /// Sin plataformas: Facebook, Instagram y Twitter
    pub async fn search_by_identifier(
        &self,
        identifier: &str,
        identifier_type: IdentifierType,
        platforms: &[Platform],
    ) -> Result<ApiResponse<SocialSearchResult>, ApiError> {
        let platforms = if platforms.is_empty() {
            Platform::DEFAULT_SEARCH.to_vec()
        } else {
            platforms.to_vec()
        };
        let request = SocialMediaSearch {
            identifier: identifier.to_string(),
            identifier_type,
            platforms,
            deep_search: false,
        };
        self.search(&request).await
    }

    pub async fn get_search_history(
        &self,
    ) -> Result<ApiResponse<Vec<SocialSearchResult>>, ApiError> {
        self.client.get(social::SEARCH).await
    }

    pub async fn delete_search_result(&self, search_id: &str) -> Result<Ack, ApiError> {
        self.client
            .delete(&format!("{}/{}", social::SEARCH, path_segment(search_id)))
            .await
    }
}
