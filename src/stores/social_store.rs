use crate::error::ValidationError;
use crate::models::{ApiResponse, SocialMediaSearch, SocialSearchResult, Validate};
use crate::services::SocialService;
use crate::state::{RequestSlot, RunOutcome, SearchHistory};

/// Perfiles en redes sociales
#[derive(Clone)]
pub struct SocialStore {
    service: SocialService,
    pub scrape_results: RequestSlot<ApiResponse<SocialSearchResult>>,
    pub profile_results: RequestSlot<ApiResponse<SocialSearchResult>>,
    pub search_results: RequestSlot<ApiResponse<SocialSearchResult>>,
    pub search_history: SearchHistory<SocialSearchResult>,
}

impl SocialStore {
    pub fn new(service: SocialService) -> Self {
        Self {
            service,
            scrape_results: RequestSlot::new("social.scrape"),
            profile_results: RequestSlot::new("social.profiles"),
            search_results: RequestSlot::new("social.search"),
            search_history: SearchHistory::new(),
        }
    }

    /// Scraping de perfiles (POST /social/scrape), guarda historial
    pub async fn scrape_profile(&self, request: &SocialMediaSearch) -> Result<(), ValidationError> {
        request.validate()?;
        let outcome = self
            .scrape_results
            .run(
                async { self.service.scrape_profiles(request).await?.into_result() },
                "Profile scraping failed",
            )
            .await;
        if let RunOutcome::Success(ApiResponse { data: Some(result), .. }) = outcome {
            self.search_history.push(result);
        }
        Ok(())
    }

    /// Búsqueda por identificador en las plataformas pedidas
    pub async fn search_profiles(&self, request: &SocialMediaSearch) -> Result<(), ValidationError> {
        request.validate()?;
        self.profile_results
            .run(
                async {
                    self.service
                        .search_by_identifier(
                            &request.identifier,
                            request.identifier_type,
                            &request.platforms,
                        )
                        .await?
                        .into_result()
                },
                "Profile search failed",
            )
            .await;
        Ok(())
    }

    /// Búsqueda de contenido con el request completo (incluye deep search)
    pub async fn search_content(&self, request: &SocialMediaSearch) -> Result<(), ValidationError> {
        request.validate()?;
        self.search_results
            .run(
                async { self.service.search(request).await?.into_result() },
                "Content search failed",
            )
            .await;
        Ok(())
    }

    pub fn clear_scrape_results(&self) {
        self.scrape_results.clear();
    }

    pub fn clear_profile_results(&self) {
        self.profile_results.clear();
    }

    pub fn clear_search_results(&self) {
        self.search_results.clear();
    }

    pub fn clear_errors(&self) {
        self.scrape_results.clear_error();
        self.profile_results.clear_error();
        self.search_results.clear_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IdentifierType, Platform};
    use crate::services::token_storage::MemoryTokenStorage;
    use crate::testing::{client_with, envelope, StubTransport};
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn store(stub: &Rc<StubTransport>) -> SocialStore {
        SocialStore::new(SocialService::new(client_with(stub, &MemoryTokenStorage::new())))
    }

    fn request(deep_search: bool) -> SocialMediaSearch {
        SocialMediaSearch {
            identifier: "jdoe".to_string(),
            identifier_type: IdentifierType::Username,
            platforms: vec![Platform::Instagram, Platform::Linkedin],
            deep_search,
        }
    }

    #[test]
    fn test_actions_hit_their_endpoints() {
        let stub = StubTransport::new();
        for id in ["a", "b", "c"] {
            stub.reply_json(200, envelope(json!({ "searchId": id, "identifier": "jdoe" })));
        }
        let store = store(&stub);

        block_on(store.scrape_profile(&request(false))).unwrap();
        block_on(store.search_profiles(&request(true))).unwrap();
        block_on(store.search_content(&request(true))).unwrap();

        let urls: Vec<String> = stub.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://api.test/api/social/scrape",
                "http://api.test/api/social/search",
                "http://api.test/api/social/search",
            ]
        );
        assert_eq!(store.search_history.len(), 1);
        assert_eq!(store.scrape_results.data().unwrap().data.unwrap().search_id, "a");
        assert_eq!(store.profile_results.data().unwrap().data.unwrap().search_id, "b");
        assert_eq!(store.search_results.data().unwrap().data.unwrap().search_id, "c");
    }

    #[test]
    fn test_profile_search_drops_deep_search_flag() {
        let stub = StubTransport::new();
        stub.reply_json(200, envelope(json!({})));
        let store = store(&stub);

        block_on(store.search_profiles(&request(true))).unwrap();

        let body = match stub.last_request().unwrap().body {
            crate::services::RequestBody::Json(body) => body,
            other => panic!("unexpected body {:?}", other),
        };
        assert!(body.contains(r#""deepSearch":false"#));
        assert!(body.contains(r#""platforms":["instagram","linkedin"]"#));
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        let stub = StubTransport::new();
        let store = store(&stub);
        let mut invalid = request(false);
        invalid.identifier = " ".to_string();

        assert_eq!(
            block_on(store.scrape_profile(&invalid)).unwrap_err().field,
            "identifier"
        );
        assert!(store.scrape_results.snapshot().is_idle());
    }

    #[test]
    fn test_failed_scrape_sets_error_and_skips_history() {
        let stub = StubTransport::new();
        stub.reply_raw(503, "scraper offline");
        let store = store(&stub);

        block_on(store.scrape_profile(&request(false))).unwrap();

        let state = store.scrape_results.snapshot();
        assert!(!state.is_loading);
        assert!(state.data.is_none());
        assert_eq!(state.error.as_deref(), Some("HTTP 503: scraper offline"));
        assert!(store.search_history.is_empty());

        store.clear_errors();
        assert!(store.scrape_results.snapshot().is_idle());
    }

    #[test]
    fn test_clear_resets_only_its_own_slot() {
        let stub = StubTransport::new();
        stub.reply_json(200, envelope(json!({ "searchId": "a" })));
        stub.reply_json(200, envelope(json!({ "searchId": "b" })));
        stub.reply_json(200, envelope(json!({ "searchId": "c" })));
        let store = store(&stub);
        block_on(store.scrape_profile(&request(false))).unwrap();
        block_on(store.search_profiles(&request(false))).unwrap();
        block_on(store.search_content(&request(false))).unwrap();

        store.clear_profile_results();

        assert!(store.profile_results.snapshot().is_idle());
        assert!(store.scrape_results.data().is_some());
        assert!(store.search_results.data().is_some());
        assert_eq!(store.search_history.len(), 1);

        store.clear_scrape_results();
        store.clear_search_results();
        assert!(store.scrape_results.snapshot().is_idle());
        assert!(store.search_results.snapshot().is_idle());
    }
}
