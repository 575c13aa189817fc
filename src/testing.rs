// Dobles de prueba compartidos por los tests de servicios, stores y app

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};

use crate::error::TransportError;
use crate::routing::Navigator;
use crate::services::api_client::ApiClient;
use crate::services::token_storage::MemoryTokenStorage;
use crate::services::transport::{HttpRequest, HttpResponse, Transport};

pub const TEST_BASE_URL: &str = "http://api.test/api";

type Reply = Result<HttpResponse, TransportError>;

enum Scripted {
    Ready(Reply),
    Progress(Vec<u8>, Reply),
    Deferred(Vec<u8>, oneshot::Receiver<Reply>),
}

/// Transporte guionizado: respuestas en orden FIFO, requests grabados
#[derive(Default)]
pub struct StubTransport {
    requests: RefCell<Vec<HttpRequest>>,
    replies: RefCell<VecDeque<Scripted>>,
}

impl StubTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply_json(&self, status: u16, body: Value) {
        self.reply_raw(status, &body.to_string());
    }

    pub fn reply_raw(&self, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(Scripted::Ready(Ok(response(status, body))));
    }

    pub fn reply_error(&self, error: TransportError) {
        self.replies.borrow_mut().push_back(Scripted::Ready(Err(error)));
    }

    pub fn reply_with_progress(&self, steps: Vec<u8>, status: u16, body: Value) {
        self.replies
            .borrow_mut()
            .push_back(Scripted::Progress(steps, Ok(response(status, &body.to_string()))));
    }

    /// La respuesta llega cuando el test la envía por el canal
    pub fn reply_deferred(&self) -> oneshot::Sender<Reply> {
        self.reply_deferred_with_progress(Vec::new())
    }

    /// Reporta `steps` de progreso y se queda esperando la respuesta
    pub fn reply_deferred_with_progress(&self, steps: Vec<u8>) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies
            .borrow_mut()
            .push_back(Scripted::Deferred(steps, rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(
        &self,
        request: HttpRequest,
        progress: Option<&dyn Fn(u8)>,
    ) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let scripted = self.replies.borrow_mut().pop_front();
        match scripted {
            None => Err(TransportError::Network("no scripted reply".to_string())),
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Progress(steps, reply)) => {
                if let Some(progress) = progress {
                    steps.into_iter().for_each(progress);
                }
                reply
            }
            Some(Scripted::Deferred(steps, rx)) => {
                if let Some(progress) = progress {
                    steps.into_iter().for_each(progress);
                }
                rx.await
                    .unwrap_or_else(|_| Err(TransportError::Network("reply dropped".to_string())))
            }
        }
    }
}

pub fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        body: body.to_string(),
    }
}

/// Envelope `success: true` alrededor de `data`
pub fn envelope(data: Value) -> Value {
    json!({ "success": true, "data": data, "timestamp": "2024-05-01T10:00:00Z" })
}

pub fn ok_envelope(data: Value) -> Reply {
    Ok(response(200, &envelope(data).to_string()))
}

pub fn client_with(stub: &Rc<StubTransport>, tokens: &MemoryTokenStorage) -> ApiClient {
    let transport: Rc<dyn Transport> = stub.clone();
    ApiClient::new(TEST_BASE_URL, transport, Rc::new(tokens.clone()))
}

pub fn user_json() -> Value {
    json!({
        "id": "u-1",
        "email": "ana@example.com",
        "name": "Ana",
        "role": "investigator",
        "permissions": ["news:read"],
        "createdAt": "2024-01-10T08:00:00Z"
    })
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}
