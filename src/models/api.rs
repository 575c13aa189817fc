use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Envelope común de todas las respuestas de los servicios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Respuesta sin payload útil (delete, stop, ...)
pub type Ack = ApiResponse<serde_json::Value>;

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            timestamp: Some(Utc::now()),
        }
    }

    /// `success: false` se convierte en `ApiError::Application`
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.success {
            return Ok(self);
        }
        let message = self
            .error
            .or(self.message)
            .unwrap_or_default();
        Err(ApiError::Application(message))
    }
}
