// ============================================================================
// REQWEST TRANSPORT - Cliente HTTP fuera del navegador (CLI, tests de integración)
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport};
use crate::error::TransportError;

/// Transporte nativo sobre reqwest.
///
/// `send` debe ejecutarse dentro de un runtime Tokio 1.x (por ejemplo
/// `tokio::runtime::Builder::new_current_thread().enable_all()` +
/// `block_on`); fuera de él reqwest no tiene reactor.
pub struct ReqwestTransport {
    client: Client,
    timeout_seconds: u32,
}

impl ReqwestTransport {
    pub fn new(timeout_seconds: u32) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(timeout_seconds)))
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self {
            client,
            timeout_seconds,
        })
    }

    fn map_error(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(self.timeout_seconds)
        } else {
            TransportError::Network(error.to_string())
        }
    }
}

fn method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: HttpRequest,
        progress: Option<&dyn Fn(u8)>,
    ) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(method(request.method), &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.body(body),
            RequestBody::Multipart { file, fields } => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.name)
                    .mime_str(&file.mime_type)
                    .map_err(|e| TransportError::Network(e.to_string()))?;
                let form = fields
                    .into_iter()
                    .fold(Form::new().part("file", part), |form, (key, value)| {
                        form.text(key, value)
                    });
                if let Some(progress) = progress {
                    progress(0);
                }
                builder.multipart(form)
            }
        };

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;
        Ok(HttpResponse { status, body })
    }
}
