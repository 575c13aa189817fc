use crate::error::ApiError;
use crate::models::news::EntitiesRequest;
use crate::models::{
    Ack, ApiResponse, MonitorHandle, NewsAnalysis, NewsAnalysisResult, NewsEntity,
    NewsMonitorOptions,
};
use crate::services::api_client::ApiClient;
use crate::utils::endpoints::news;
use crate::utils::path_segment;

#[derive(Clone)]
pub struct NewsService {
    client: ApiClient,
}

impl NewsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn analyze_news(
        &self,
        request: &NewsAnalysis,
    ) -> Result<ApiResponse<NewsAnalysisResult>, ApiError> {
        self.client.post(news::ANALYZE, request).await
    }

    pub async fn extract_entities(
        &self,
        content: &str,
    ) -> Result<ApiResponse<Vec<NewsEntity>>, ApiError> {
        self.client
            .post(news::ENTITIES, &EntitiesRequest { content })
            .await
    }

    pub async fn start_monitoring(
        &self,
        options: &NewsMonitorOptions,
    ) -> Result<ApiResponse<MonitorHandle>, ApiError> {
        self.client.post(news::MONITOR, options).await
    }

    pub async fn get_monitoring_results(
        &self,
        monitor_id: &str,
    ) -> Result<ApiResponse<Vec<NewsAnalysisResult>>, ApiError> {
        self.client
            .get(&format!("{}/{}/results", news::MONITOR, path_segment(monitor_id)))
            .await
    }

    pub async fn stop_monitoring(&self, monitor_id: &str) -> Result<Ack, ApiError> {
        self.client
            .delete(&format!("{}/{}", news::MONITOR, path_segment(monitor_id)))
            .await
    }
}
