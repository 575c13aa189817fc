use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, UserProfile};
use crate::services::api_client::ApiClient;
use crate::utils::endpoints::auth;

/// Endpoints de sesión. Sin envelope: devuelven el payload directamente.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Perform login with email and password
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Login de {}", request.email);
        self.client.post(auth::LOGIN, request).await
    }

    /// Perfil del usuario dueño del token actual
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.client.get(auth::ME).await
    }
}
