//! HTTP types shared by the transport and the services.
//!
//! # Design
//! A `Transport` turns a `ConcreteRequest` into a raw `HttpResponse` and
//! nothing more. `HttpService` sits on top and normalizes every outcome into
//! one of two envelopes: `HttpSuccessResponse` (status 200, parsed JSON) or
//! `HttpErrorResponse` (any other status, or a failure while talking to the
//! server, reported as status 500). Only a released transport escapes as a
//! `ClientError`, since that is a bug in the caller rather than a remote
//! failure.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ClientError, TransportError};
use crate::route::ConcreteRequest;
use crate::transport::Transport;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A raw HTTP response as returned by a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Normalized successful exchange. Deserializers only ever read `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpSuccessResponse {
    pub status: u16,
    pub message: String,
    pub data: Value,
}

/// Normalized failed exchange: a non-200 status from the server, or a
/// transport failure reported as status 500.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    pub status: u16,
    pub message: String,
}

impl HttpErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
        }
    }
}

/// Sends routes through a shared transport and normalizes the outcome.
#[derive(Clone)]
pub struct HttpService {
    transport: Arc<dyn Transport>,
}

impl HttpService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Perform one exchange. The outer `Err` is only ever `ClientError::Closed`.
    pub async fn fetch(
        &self,
        request: &ConcreteRequest,
    ) -> Result<Result<HttpSuccessResponse, HttpErrorResponse>, ClientError> {
        debug!(
            method = request.method.as_str(),
            uri = %request.uri,
            params = request.params.len(),
            "dispatching request"
        );

        let envelope = match self.transport.send(request).await {
            Ok(response) => normalize(response),
            Err(TransportError::Closed) => return Err(ClientError::Closed),
            Err(e) => Err(HttpErrorResponse::internal(e.to_string())),
        };

        match &envelope {
            Ok(success) => debug!(status = success.status, uri = %request.uri, "request succeeded"),
            Err(error) => warn!(
                status = error.status,
                message = %error.message,
                uri = %request.uri,
                "request failed"
            ),
        }
        Ok(envelope)
    }

    pub async fn close(&self) -> Result<(), ClientError> {
        self.transport.close().await.map_err(|e| match e {
            TransportError::Closed => ClientError::Closed,
            other => ClientError::Transport(other),
        })
    }
}

/// Map a raw response onto the success/error envelopes.
fn normalize(response: HttpResponse) -> Result<HttpSuccessResponse, HttpErrorResponse> {
    let data: Value = match serde_json::from_str(&response.body) {
        Ok(data) => data,
        Err(e) if response.status == 200 => {
            warn!(
                content_type = response.header("content-type").unwrap_or("none"),
                "ok response is not json"
            );
            return Err(HttpErrorResponse::internal(e.to_string()));
        }
        Err(_) => {
            return Err(HttpErrorResponse {
                status: response.status,
                message: response.body,
            })
        }
    };

    if response.status == 200 {
        return Ok(HttpSuccessResponse {
            status: response.status,
            message: "Success.".to_string(),
            data,
        });
    }

    let message = match data.get("error") {
        Some(Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => response.body,
    };
    Err(HttpErrorResponse {
        status: response.status,
        message,
    })
}
