// ============================================================================
// TRANSPORT - Seam entre el cliente y la red
// ============================================================================
// Browser: FetchTransport (gloo-net) | nativo: ReqwestTransport | tests: stub
// ============================================================================

use std::cell::Cell;
use std::fmt;

use async_trait::async_trait;

use crate::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archivo seleccionado por el usuario para un upload multipart
#[derive(Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(String),
    /// El archivo va en el campo `file`
    Multipart {
        file: UploadFile,
        fields: Vec<(String, String)>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    /// Header por nombre (sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Envío de un request ya construido. Sin efectos laterales más allá de la red.
///
/// `progress` recibe porcentajes de subida (0-100) cuando el transporte sabe
/// medirlos; puede no llamarse nunca.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(
        &self,
        request: HttpRequest,
        progress: Option<&dyn Fn(u8)>,
    ) -> Result<HttpResponse, TransportError>;
}

/// Normaliza el progreso que llega del transporte: nunca decrece, nunca pasa
/// de 100, y termina en 100 cuando el upload acaba bien
pub struct ProgressTracker<'a> {
    callback: Option<&'a dyn Fn(u8)>,
    last: Cell<Option<u8>>,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(callback: Option<&'a dyn Fn(u8)>) -> Self {
        Self {
            callback,
            last: Cell::new(None),
        }
    }

    pub fn report(&self, percent: u8) {
        let percent = percent.min(100);
        if matches!(self.last.get(), Some(last) if percent < last) {
            return;
        }
        self.last.set(Some(percent));
        if let Some(callback) = self.callback {
            callback(percent);
        }
    }

    pub fn finish(&self) {
        if self.last.get() != Some(100) {
            self.report(100);
        }
    }

    pub fn last(&self) -> Option<u8> {
        self.last.get()
    }
}
