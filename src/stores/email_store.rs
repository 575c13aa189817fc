// ============================================================================
// EMAIL STORE - Análisis de emails, brechas y dominios
// ============================================================================

use crate::error::ValidationError;
use crate::models::validation::{validate_domain, validate_email};
use crate::models::{
    ApiResponse, Breach, DomainInfo, EmailAnalysis, EmailAnalysisResult, EmailValidation, Validate,
};
use crate::services::EmailService;
use crate::state::{RequestSlot, RunOutcome, SearchHistory};

#[derive(Clone)]
pub struct EmailStore {
    service: EmailService,
    pub analysis_results: RequestSlot<ApiResponse<EmailAnalysisResult>>,
    pub breach_results: RequestSlot<ApiResponse<Vec<Breach>>>,
    pub domain_results: RequestSlot<ApiResponse<DomainInfo>>,
    pub validation_results: RequestSlot<ApiResponse<EmailValidation>>,
    pub analysis_history: SearchHistory<EmailAnalysisResult>,
}

impl EmailStore {
    pub fn new(service: EmailService) -> Self {
        Self {
            service,
            analysis_results: RequestSlot::new("email.analysis"),
            breach_results: RequestSlot::new("email.breach"),
            domain_results: RequestSlot::new("email.domain"),
            validation_results: RequestSlot::new("email.validation"),
            analysis_history: SearchHistory::new(),
        }
    }

    pub async fn analyze_email(&self, request: &EmailAnalysis) -> Result<(), ValidationError> {
        request.validate()?;
        let outcome = self
            .analysis_results
            .run(
                async { self.service.analyze_email(request).await?.into_result() },
                "Email analysis failed",
            )
            .await;
        if let RunOutcome::Success(ApiResponse { data: Some(result), .. }) = outcome {
            self.analysis_history.push(result);
        }
        Ok(())
    }

    pub async fn check_breach(&self, email: &str) -> Result<(), ValidationError> {
        validate_email("email", email)?;
        self.breach_results
            .run(
                async { self.service.check_breaches(email).await?.into_result() },
                "Breach check failed",
            )
            .await;
        Ok(())
    }

    pub async fn check_domain(&self, domain: &str) -> Result<(), ValidationError> {
        validate_domain("domain", domain)?;
        let domain = domain.trim();
        self.domain_results
            .run(
                async { self.service.get_domain_info(domain).await?.into_result() },
                "Domain check failed",
            )
            .await;
        Ok(())
    }

    pub async fn validate_email(&self, email: &str) -> Result<(), ValidationError> {
        validate_email("email", email)?;
        self.validation_results
            .run(
                async { self.service.validate_email(email).await?.into_result() },
                "Email validation failed",
            )
            .await;
        Ok(())
    }

    pub fn clear_analysis_results(&self) {
        self.analysis_results.clear();
    }

    pub fn clear_breach_results(&self) {
        self.breach_results.clear();
    }

    pub fn clear_domain_results(&self) {
        self.domain_results.clear();
    }

    pub fn clear_validation_results(&self) {
        self.validation_results.clear();
    }

    pub fn clear_errors(&self) {
        self.analysis_results.clear_error();
        self.breach_results.clear_error();
        self.domain_results.clear_error();
        self.validation_results.clear_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reputation;
    use crate::services::token_storage::MemoryTokenStorage;
    use crate::testing::{client_with, envelope, ok_envelope, StubTransport};
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::json;
    use std::rc::Rc;

    fn store(stub: &Rc<StubTransport>) -> EmailStore {
        EmailStore::new(EmailService::new(client_with(stub, &MemoryTokenStorage::new())))
    }

    fn analysis(email: &str) -> EmailAnalysis {
        EmailAnalysis::new(email)
    }

    #[test]
    fn test_analyze_email_success() {
        let stub = StubTransport::new();
        stub.reply_json(
            200,
            envelope(json!({
                "email": "a@b.com",
                "riskScore": 12,
                "reputation": "good",
                "breaches": []
            })),
        );
        let store = store(&stub);

        block_on(store.analyze_email(&analysis("a@b.com"))).unwrap();

        let state = store.analysis_results.snapshot();
        let result = state.data.unwrap().data.unwrap();
        assert_eq!(result.risk_score, 12.0);
        assert_eq!(result.reputation, Reputation::Good);
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(store.analysis_history.len(), 1);
        assert_eq!(store.analysis_history.latest().unwrap().email, "a@b.com");
    }

    #[test]
    fn test_invalid_email_is_rejected_before_network() {
        let stub = StubTransport::new();
        let store = store(&stub);

        let err = block_on(store.analyze_email(&analysis("nope"))).unwrap_err();

        assert_eq!(err.field, "email");
        assert!(stub.requests().is_empty());
        assert!(store.analysis_results.snapshot().is_idle());
    }

    #[test]
    fn test_network_failure_sets_error_and_keeps_history() {
        let stub = StubTransport::new();
        stub.reply_raw(500, "Internal error");
        let store = store(&stub);

        block_on(store.analyze_email(&analysis("a@b.com"))).unwrap();

        let state = store.analysis_results.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("HTTP 500: Internal error"));
        assert!(store.analysis_history.is_empty());
    }

    #[test]
    fn test_unsuccessful_envelope_fails_slot() {
        let stub = StubTransport::new();
        stub.reply_json(200, json!({ "success": false, "error": "Quota exceeded" }));
        let store = store(&stub);

        block_on(store.check_breach("a@b.com")).unwrap();

        assert_eq!(store.breach_results.error().as_deref(), Some("Quota exceeded"));
        assert_eq!(store.breach_results.data(), None);
    }

    #[test]
    fn test_success_without_data_skips_history() {
        let stub = StubTransport::new();
        stub.reply_json(200, json!({ "success": true }));
        let store = store(&stub);

        block_on(store.analyze_email(&analysis("a@b.com"))).unwrap();

        assert!(store.analysis_results.data().is_some());
        assert!(store.analysis_history.is_empty());
    }

    #[test]
    fn test_clear_errors_touches_only_errors() {
        let stub = StubTransport::new();
        stub.reply_json(200, envelope(json!([])));
        stub.reply_raw(500, "down");
        let store = store(&stub);

        block_on(store.check_breach("a@b.com")).unwrap();
        block_on(store.check_domain("example.com")).unwrap();
        assert!(store.domain_results.error().is_some());

        store.clear_errors();

        assert_eq!(store.domain_results.error(), None);
        assert!(store.breach_results.data().is_some());
    }

    #[test]
    fn test_clear_resets_single_slot() {
        let stub = StubTransport::new();
        stub.reply_json(200, envelope(json!({ "isValid": true })));
        stub.reply_json(200, envelope(json!([])));
        let store = store(&stub);

        block_on(store.validate_email("a@b.com")).unwrap();
        block_on(store.check_breach("a@b.com")).unwrap();
        store.clear_validation_results();

        assert!(store.validation_results.snapshot().is_idle());
        assert!(store.breach_results.data().is_some());
    }

    #[test]
    fn test_latest_call_wins_when_responses_arrive_out_of_order() {
        let stub = StubTransport::new();
        let first_reply = stub.reply_deferred();
        let second_reply = stub.reply_deferred();
        let store = store(&stub);

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let first = store.clone();
        spawner
            .spawn_local(async move {
                first.analyze_email(&analysis("first@b.com")).await.unwrap();
            })
            .unwrap();
        pool.run_until_stalled();

        let second = store.clone();
        spawner
            .spawn_local(async move {
                second.analyze_email(&analysis("second@b.com")).await.unwrap();
            })
            .unwrap();
        pool.run_until_stalled();

        second_reply
            .send(ok_envelope(json!({ "email": "second@b.com", "riskScore": 40 })))
            .unwrap();
        pool.run_until_stalled();
        // La primera llamada ya fue abortada: su respuesta tardía no llega a nadie
        let _ = first_reply.send(ok_envelope(json!({ "email": "first@b.com", "riskScore": 1 })));
        pool.run_until_stalled();

        let state = store.analysis_results.snapshot();
        assert_eq!(state.data.unwrap().data.unwrap().email, "second@b.com");
        assert!(!state.is_loading);
        assert_eq!(store.analysis_history.len(), 1);
        assert_eq!(stub.requests().len(), 2);
    }
}
