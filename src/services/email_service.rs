use crate::error::ApiError;
use crate::models::email::EmailRequest;
use crate::models::{
    Ack, ApiResponse, Breach, DomainInfo, EmailAnalysis, EmailAnalysisResult, EmailValidation,
};
use crate::services::api_client::ApiClient;
use crate::utils::endpoints::email;
use crate::utils::path_segment;

#[derive(Clone)]
pub struct EmailService {
    client: ApiClient,
}

impl EmailService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn analyze_email(
        &self,
        request: &EmailAnalysis,
    ) -> Result<ApiResponse<EmailAnalysisResult>, ApiError> {
        self.client.post(email::ANALYZE, request).await
    }

    pub async fn check_breaches(&self, address: &str) -> Result<ApiResponse<Vec<Breach>>, ApiError> {
        self.client
            .post(email::BREACH_CHECK, &EmailRequest { email: address })
            .await
    }

    pub async fn get_domain_info(&self, domain: &str) -> Result<ApiResponse<DomainInfo>, ApiError> {
        self.client
            .get_with_query(email::DOMAIN_INFO, &[("domain", domain.to_string())])
            .await
    }

    pub async fn validate_email(
        &self,
        address: &str,
    ) -> Result<ApiResponse<EmailValidation>, ApiError> {
        self.client
            .post(
                &format!("{}/validate", email::ANALYZE),
                &EmailRequest { email: address },
            )
            .await
    }

    pub async fn get_analysis_history(
        &self,
    ) -> Result<ApiResponse<Vec<EmailAnalysisResult>>, ApiError> {
        self.client.get(email::ANALYZE).await
    }

    pub async fn delete_analysis(&self, analysis_id: &str) -> Result<Ack, ApiError> {
        self.client
            .delete(&format!("{}/{}", email::ANALYZE, path_segment(analysis_id)))
            .await
    }
}
