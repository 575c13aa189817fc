use crate::error::ValidationError;
use crate::models::{
    ApiResponse, MonitorHandle, NewsAnalysis, NewsAnalysisResult, NewsEntity, NewsMonitorOptions,
    Validate,
};
use crate::services::NewsService;
use crate::state::{RequestSlot, RunOutcome, SearchHistory};

/// Análisis de noticias, extracción de entidades y monitores
#[derive(Clone)]
pub struct NewsStore {
    service: NewsService,
    pub analysis_data: RequestSlot<ApiResponse<NewsAnalysisResult>>,
    pub entities_data: RequestSlot<ApiResponse<Vec<NewsEntity>>>,
    pub monitoring_data: RequestSlot<ApiResponse<MonitorHandle>>,
    pub analysis_history: SearchHistory<NewsAnalysisResult>,
}

impl NewsStore {
    pub fn new(service: NewsService) -> Self {
        Self {
            service,
            analysis_data: RequestSlot::new("news.analysis"),
            entities_data: RequestSlot::new("news.entities"),
            monitoring_data: RequestSlot::new("news.monitoring"),
            analysis_history: SearchHistory::new(),
        }
    }

    pub async fn analyze_news(&self, request: &NewsAnalysis) -> Result<(), ValidationError> {
        request.validate()?;
        let outcome = self
            .analysis_data
            .run(
                async { self.service.analyze_news(request).await?.into_result() },
                "Analysis failed",
            )
            .await;
        if let RunOutcome::Success(ApiResponse { data: Some(result), .. }) = outcome {
            self.analysis_history.push(result);
        }
        Ok(())
    }

    pub async fn extract_entities(&self, content: &str) -> Result<(), ValidationError> {
        if content.trim().is_empty() {
            return Err(ValidationError::new("content", "Content is required"));
        }
        self.entities_data
            .run(
                async { self.service.extract_entities(content).await?.into_result() },
                "Entity extraction failed",
            )
            .await;
        Ok(())
    }

    pub async fn start_monitoring(&self, options: &NewsMonitorOptions) -> Result<(), ValidationError> {
        options.validate()?;
        self.monitoring_data
            .run(
                async { self.service.start_monitoring(options).await?.into_result() },
                "Monitoring setup failed",
            )
            .await;
        Ok(())
    }

    pub fn clear_analysis_data(&self) {
        self.analysis_data.clear();
    }

    pub fn clear_entities_data(&self) {
        self.entities_data.clear();
    }

    pub fn clear_monitoring_data(&self) {
        self.monitoring_data.clear();
    }

    pub fn clear_errors(&self) {
        self.analysis_data.clear_error();
        self.entities_data.clear_error();
        self.monitoring_data.clear_error();
    }
}
