// ============================================================================
// ERRORES - Taxonomía de errores del cliente
// ============================================================================
// Transporte (red / timeout) -> HTTP (no 2xx) -> aplicación (envelope con
// success=false) -> validación (antes de cualquier request)
// ============================================================================

use thiserror::Error;

use crate::utils::truncate_text;

/// Máximo de caracteres del body que se muestran en un error HTTP
const ERROR_BODY_PREVIEW: usize = 200;

/// Error producido por la capa de transporte (sin respuesta del servidor)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0}s")]
    Timeout(u32),
}

/// Rechazo de un request por el esquema del cliente
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error de una llamada a la API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("HTTP {status}: {}", truncate_text(.body, ERROR_BODY_PREVIEW))]
    Http { status: u16, body: String },

    /// 401: la política global decide qué hacer (ver `app::LoginRedirect`)
    #[error("Unauthorized: session expired or invalid credentials")]
    Unauthorized { body: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Parse error: {0}")]
    Decode(String),

    /// Envelope con `success: false`
    #[error("{0}")]
    Application(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Status HTTP si el servidor llegó a responder
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Mensaje para el banner de error; `fallback` si el error no trae texto
    pub fn user_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// Configuración inválida detectada al arrancar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_of_http_errors() {
        let err = ApiError::Http {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "HTTP 503: down");

        let unauthorized = ApiError::Unauthorized { body: String::new() };
        assert_eq!(unauthorized.status(), Some(401));
        assert!(unauthorized.is_unauthorized());

        let timeout = ApiError::from(TransportError::Timeout(30));
        assert_eq!(timeout.status(), None);
        assert_eq!(timeout.to_string(), "Request timed out after 30s");
    }

    #[test]
    fn test_http_body_is_truncated_in_message() {
        let err = ApiError::Http {
            status: 500,
            body: "x".repeat(500),
        };
        let message = err.to_string();
        assert!(message.len() < 260);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn test_user_message_falls_back_when_empty() {
        let err = ApiError::Application(String::new());
        assert_eq!(err.user_message("Email analysis failed"), "Email analysis failed");

        let err = ApiError::Application("quota exceeded".to_string());
        assert_eq!(err.user_message("Email analysis failed"), "quota exceeded");
    }
}
