use crate::error::ValidationError;
use crate::models::validation::validate_keywords;
use crate::models::{
    ApiResponse, DarkWebMonitor, DarkWebSearch, DarkWebSearchResponse, KeywordSearch, Validate,
};
use crate::services::DarkWebService;
use crate::state::{RequestSlot, RunOutcome, SearchHistory};

/// Búsquedas y monitores en la dark web
#[derive(Clone)]
pub struct DarkWebStore {
    service: DarkWebService,
    pub search_results: RequestSlot<ApiResponse<DarkWebSearchResponse>>,
    pub monitor_results: RequestSlot<ApiResponse<DarkWebMonitor>>,
    pub keyword_results: RequestSlot<ApiResponse<DarkWebSearchResponse>>,
    pub search_history: SearchHistory<DarkWebSearchResponse>,
}

impl DarkWebStore {
    pub fn new(service: DarkWebService) -> Self {
        Self {
            service,
            search_results: RequestSlot::new("darkweb.search"),
            monitor_results: RequestSlot::new("darkweb.monitor"),
            keyword_results: RequestSlot::new("darkweb.keywords"),
            search_history: SearchHistory::new(),
        }
    }

    pub async fn search_dark_web(&self, request: &DarkWebSearch) -> Result<(), ValidationError> {
        request.validate()?;
        let outcome = self
            .search_results
            .run(
                async { self.service.search_dark_web(request).await?.into_result() },
                "Dark web search failed",
            )
            .await;
        if let RunOutcome::Success(ApiResponse { data: Some(response), .. }) = outcome {
            self.search_history.push(response);
        }
        Ok(())
    }

    pub async fn setup_monitor(
        &self,
        keywords: &[String],
        identifier: Option<&str>,
    ) -> Result<(), ValidationError> {
        validate_keywords("keywords", keywords)?;
        self.monitor_results
            .run(
                async {
                    self.service
                        .create_monitor(keywords, identifier)
                        .await?
                        .into_result()
                },
                "Monitor setup failed",
            )
            .await;
        Ok(())
    }

    /// Usa el endpoint de búsqueda general; las fuentes aún no se envían
    pub async fn search_keywords(&self, request: &KeywordSearch) -> Result<(), ValidationError> {
        request.validate()?;
        let search = DarkWebSearch {
            keywords: request.keywords.clone(),
            time_range: request.time_range,
            ..DarkWebSearch::default()
        };
        self.keyword_results
            .run(
                async { self.service.search_dark_web(&search).await?.into_result() },
                "Keyword search failed",
            )
            .await;
        Ok(())
    }

    pub fn clear_search_results(&self) {
        self.search_results.clear();
    }

    pub fn clear_monitor_results(&self) {
        self.monitor_results.clear();
    }

    pub fn clear_keyword_results(&self) {
        self.keyword_results.clear();
    }

    pub fn clear_errors(&self) {
        self.search_results.clear_error();
        self.monitor_results.clear_error();
        self.keyword_results.clear_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::models::TimeRange;
    use crate::services::token_storage::MemoryTokenStorage;
    use crate::services::RequestBody;
    use crate::testing::{client_with, envelope, StubTransport};
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn store(stub: &Rc<StubTransport>) -> DarkWebStore {
        DarkWebStore::new(DarkWebService::new(client_with(stub, &MemoryTokenStorage::new())))
    }

    #[test]
    fn test_search_records_history() {
        let stub = StubTransport::new();
        stub.reply_json(
            200,
            envelope(json!({
                "searchId": "d-1",
                "results": [{ "id": "r-1", "category": "paste", "relevanceScore": 0.8 }],
                "status": "completed"
            })),
        );
        let store = store(&stub);

        block_on(store.search_dark_web(&DarkWebSearch::keywords(["acme corp"]))).unwrap();

        let latest = store.search_history.latest().unwrap();
        assert_eq!(latest.search_id, "d-1");
        assert_eq!(latest.results.len(), 1);
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let stub = StubTransport::new();
        let store = store(&stub);

        assert!(block_on(store.search_dark_web(&DarkWebSearch::default())).is_err());
        assert!(block_on(store.setup_monitor(&[], None)).is_err());
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_keyword_search_uses_search_endpoint() {
        let stub = StubTransport::new();
        stub.reply_json(200, envelope(json!({ "searchId": "k-1" })));
        let store = store(&stub);

        let request = KeywordSearch {
            keywords: vec!["leak".to_string()],
            sources: vec!["pastebin".to_string()],
            time_range: TimeRange::Week,
        };
        block_on(store.search_keywords(&request)).unwrap();

        let sent = stub.last_request().unwrap();
        assert_eq!(sent.url, "http://api.test/api/darkweb/search");
        assert_eq!(
            sent.body,
            RequestBody::Json(r#"{"keywords":["leak"],"timeRange":"7d"}"#.to_string())
        );
        assert!(store.search_history.is_empty());
    }

    #[test]
    fn test_monitor_timeout_is_reported() {
        let stub = StubTransport::new();
        stub.reply_error(TransportError::Timeout(30));
        let store = store(&stub);

        block_on(store.setup_monitor(&["acme".to_string()], Some("ceo@acme.com"))).unwrap();

        assert_eq!(
            store.monitor_results.error().as_deref(),
            Some("Request timed out after 30s")
        );
        assert!(!store.monitor_results.is_loading());
    }
}
