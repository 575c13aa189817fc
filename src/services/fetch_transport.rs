// ============================================================================
// FETCH TRANSPORT - fetch() del navegador vía gloo-net
// ============================================================================

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport, UploadFile};
use crate::error::TransportError;

pub struct FetchTransport {
    timeout_seconds: u32,
}

impl FetchTransport {
    pub fn new(timeout_seconds: u32) -> Self {
        Self { timeout_seconds }
    }

    fn builder(method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(
        &self,
        request: HttpRequest,
        progress: Option<&dyn Fn(u8)>,
    ) -> Result<HttpResponse, TransportError> {
        let builder = request
            .headers
            .iter()
            .fold(Self::builder(request.method, &request.url), |builder, (key, value)| {
                builder.header(key, value)
            });

        let is_upload = matches!(request.body, RequestBody::Multipart { .. });
        let built = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(body) => builder.body(body),
            RequestBody::Multipart { file, fields } => builder.body(form_data(&file, &fields)?),
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;

        // fetch() no expone progreso de subida: solo el inicio
        if let (true, Some(progress)) = (is_upload, progress) {
            progress(0);
        }

        let exchange = Box::pin(async move {
            let response = built
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok::<_, TransportError>(HttpResponse { status, body })
        });
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_seconds.saturating_mul(1000)));

        match future::select(exchange, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(TransportError::Timeout(self.timeout_seconds)),
        }
    }
}

fn form_data(file: &UploadFile, fields: &[(String, String)]) -> Result<FormData, TransportError> {
    let form = FormData::new().map_err(js_error)?;

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

    form.append_with_blob_and_filename("file", &blob, &file.name)
        .map_err(js_error)?;
    for (key, value) in fields {
        form.append_with_str(key, value).map_err(js_error)?;
    }
    Ok(form)
}

fn js_error(value: JsValue) -> TransportError {
    TransportError::Network(format!("{:?}", value))
}
