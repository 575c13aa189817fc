// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// Construye requests (URL base, bearer token, request id), mide tiempos y
// traduce respuestas a `ApiError`. NO tiene lógica de negocio.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::token_storage::TokenStorage;
use super::transport::{
    HttpRequest, HttpResponse, Method, ProgressTracker, RequestBody, Transport, UploadFile,
};
use crate::error::ApiError;
use crate::utils::sanitize_filename;

/// Política global ante un 401 (la instala la aplicación)
pub trait UnauthorizedHandler {
    fn on_unauthorized(&self, path: &str);
}

/// Cliente API compartido por todos los servicios
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    tokens: Rc<dyn TokenStorage>,
    unauthorized_handler: Rc<RefCell<Option<Rc<dyn UnauthorizedHandler>>>>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        tokens: Rc<dyn TokenStorage>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            tokens,
            unauthorized_handler: Rc::new(RefCell::new(None)),
        }
    }

    /// Instalar la política de 401; afecta a todos los clones del cliente
    pub fn set_unauthorized_handler(&self, handler: Rc<dyn UnauthorizedHandler>) {
        *self.unauthorized_handler.borrow_mut() = Some(handler);
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> Rc<dyn TokenStorage> {
        self.tokens.clone()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::Get, path, &[], RequestBody::Empty, None)
            .await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.execute(Method::Get, path, query, RequestBody::Empty, None)
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::Post, path, &[], json_body(body)?, None)
            .await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::Put, path, &[], json_body(body)?, None)
            .await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::Patch, path, &[], json_body(body)?, None)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::Delete, path, &[], RequestBody::Empty, None)
            .await
    }

    /// Upload multipart: el archivo va en `file`, `fields` como campos de texto.
    /// `on_progress` recibe 0-100 sin retroceder y termina en 100 si todo va bien.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        mut file: UploadFile,
        fields: Vec<(String, String)>,
        on_progress: Option<&dyn Fn(u8)>,
    ) -> Result<T, ApiError> {
        file.name = sanitize_filename(&file.name);
        self.execute(
            Method::Post,
            path,
            &[],
            RequestBody::Multipart { file, fields },
            on_progress,
        )
        .await
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    fn headers(&self, body: &RequestBody) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("X-Request-Id".to_string(), Uuid::new_v4().to_string()),
        ];
        // Multipart: el boundary lo pone el transporte
        if matches!(body, RequestBody::Json(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.tokens.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        headers
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: RequestBody,
        on_progress: Option<&dyn Fn(u8)>,
    ) -> Result<T, ApiError> {
        let request = HttpRequest {
            method,
            url: self.url(path, query),
            headers: self.headers(&body),
            body,
        };

        let tracker = ProgressTracker::new(on_progress);
        let report = |percent: u8| tracker.report(percent);
        let progress: Option<&dyn Fn(u8)> = on_progress.map(|_| &report as &dyn Fn(u8));

        log::info!("🚀 {} {}", method, path);
        let started = Utc::now();
        let result = self.transport.send(request, progress).await;
        let elapsed = (Utc::now() - started).num_milliseconds();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ {} {} - {} ({}ms)", method, path, e, elapsed);
                return Err(e.into());
            }
        };

        if response.is_success() {
            log::info!("✅ {} {} - {} ({}ms)", method, path, response.status, elapsed);
            let value = decode(&response)?;
            if on_progress.is_some() {
                tracker.finish();
            }
            return Ok(value);
        }

        log::error!("❌ {} {} - {} ({}ms)", method, path, response.status, elapsed);
        match response.status {
            401 => {
                self.notify_unauthorized(path);
                Err(ApiError::Unauthorized {
                    body: response.body,
                })
            }
            403 => {
                log::warn!("⛔ Acceso denegado: {} {}", method, path);
                Err(ApiError::Http {
                    status: 403,
                    body: response.body,
                })
            }
            status => Err(ApiError::Http {
                status,
                body: response.body,
            }),
        }
    }

    fn notify_unauthorized(&self, path: &str) {
        // Clonar el handler antes de llamarlo: puede tocar el propio cliente
        let handler = self.unauthorized_handler.borrow().clone();
        match handler {
            Some(handler) => handler.on_unauthorized(path),
            None => log::warn!("🔒 401 en {} sin política instalada", path),
        }
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Un body vacío (204) se decodifica como `null`
fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
