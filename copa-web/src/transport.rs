//! `fetch`-backed transport for the API gateway.

use crate::dom;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use copa_core::error::TransportError;
use copa_core::transport::{HttpRequest, HttpResponse, Transport};
use wasm_bindgen::JsValue;
use web_sys::{Headers, Request, RequestInit, RequestMode};

#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

fn js(context: &'static str) -> impl Fn(JsValue) -> anyhow::Error {
    move |err| anyhow!("{context}: {}", dom::js_error_message(&err))
}

fn build_request(request: &HttpRequest) -> Result<Request> {
    let headers = Headers::new().map_err(js("headers"))?;
    headers
        .set("Accept", "application/json")
        .map_err(js("accept header"))?;
    if request.body.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(js("content-type header"))?;
    }
    if let Some(value) = request.authorization() {
        headers
            .set("Authorization", &value)
            .map_err(js("authorization header"))?;
    }

    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    if let Some(body) = &request.body {
        init.set_body(&JsValue::from_str(body));
    }
    Request::new_with_str_and_init(&request.url, &init).map_err(js("request"))
}

async fn perform(request: &HttpRequest) -> Result<HttpResponse> {
    let prepared = build_request(request)?;
    let response = dom::fetch(&prepared).await.map_err(js("fetch"))?;
    let body = dom::response_text(&response)
        .await
        .map_err(js("response body"))?;
    Ok(HttpResponse {
        status: response.status(),
        body,
    })
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        perform(&request)
            .await
            .map_err(|err| TransportError::Network(format!("{err:#}")))
    }
}
