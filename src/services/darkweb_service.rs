use crate::error::ApiError;
use crate::models::darkweb::KeywordsRequest;
use crate::models::{
    Ack, ApiResponse, CreateMonitorRequest, DarkWebMonitor, DarkWebResult, DarkWebSearch,
    DarkWebSearchResponse, KeywordAction, MonitorUpdate,
};
use crate::services::api_client::ApiClient;
use crate::utils::endpoints::darkweb;
use crate::utils::path_segment;

#[derive(Clone)]
pub struct DarkWebService {
    client: ApiClient,
}

impl DarkWebService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn search_dark_web(
        &self,
        request: &DarkWebSearch,
    ) -> Result<ApiResponse<DarkWebSearchResponse>, ApiError> {
        self.client.post(darkweb::SEARCH, request).await
    }

    pub async fn get_search_results(
        &self,
        search_id: &str,
    ) -> Result<ApiResponse<DarkWebSearchResponse>, ApiError> {
        self.client
            .get(&format!("{}/{}", darkweb::SEARCH, path_segment(search_id)))
            .await
    }

    pub async fn create_monitor(
        &self,
        keywords: &[String],
        identifier: Option<&str>,
    ) -> Result<ApiResponse<DarkWebMonitor>, ApiError> {
        let request = CreateMonitorRequest {
            keywords: keywords.to_vec(),
            identifier: identifier.map(str::to_string),
        };
        self.client.post(darkweb::MONITOR, &request).await
    }

    pub async fn get_monitors(&self) -> Result<ApiResponse<Vec<DarkWebMonitor>>, ApiError> {
        self.client.get(darkweb::MONITOR).await
    }

    pub async fn update_monitor(
        &self,
        monitor_id: &str,
        update: &MonitorUpdate,
    ) -> Result<ApiResponse<DarkWebMonitor>, ApiError> {
        self.client
            .patch(&format!("{}/{}", darkweb::MONITOR, path_segment(monitor_id)), update)
            .await
    }

    pub async fn delete_monitor(&self, monitor_id: &str) -> Result<Ack, ApiError> {
        self.client
            .delete(&format!("{}/{}", darkweb::MONITOR, path_segment(monitor_id)))
            .await
    }

    pub async fn get_monitor_results(
        &self,
        monitor_id: &str,
    ) -> Result<ApiResponse<Vec<DarkWebResult>>, ApiError> {
        self.client
            .get(&format!("{}/{}/results", darkweb::MONITOR, path_segment(monitor_id)))
            .await
    }

    /// Devuelve la lista de keywords resultante
    pub async fn manage_keywords(
        &self,
        action: KeywordAction,
        keywords: &[String],
    ) -> Result<ApiResponse<Vec<String>>, ApiError> {
        self.client
            .post(darkweb::KEYWORDS, &KeywordsRequest { action, keywords })
            .await
    }

    pub async fn get_keywords(&self) -> Result<ApiResponse<Vec<String>>, ApiError> {
        self.client.get(darkweb::KEYWORDS).await
    }
}
