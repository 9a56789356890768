//! The I/O boundary: something that can execute a `ConcreteRequest`.
//!
//! # Design
//! The rest of the crate never touches the network. `Transport` is the only
//! seam where bytes leave the process, which keeps the services testable with
//! a mock and lets hosts plug in their own HTTP stack. `ReqwestTransport` is
//! the default: one pooled `reqwest::Client` shared by every in-flight call,
//! released exactly once by `close`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::TransportError;
use crate::http::HttpResponse;
use crate::route::ConcreteRequest;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one exchange. Any status code is a successful send; only
    /// failures to complete the exchange are errors.
    async fn send(&self, request: &ConcreteRequest) -> Result<HttpResponse, TransportError>;

    /// Release the underlying resources. A second call returns `Closed`.
    async fn close(&self) -> Result<(), TransportError>;
}

pub struct ReqwestTransport {
    client: RwLock<Option<reqwest::Client>>,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client, e.g. to share its pool with other code.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: RwLock::new(Some(client)),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ConcreteRequest) -> Result<HttpResponse, TransportError> {
        // reqwest::Client is a handle onto a shared pool, cloning it is cheap.
        let client = self.client.read().await.clone().ok_or(TransportError::Closed)?;

        let mut builder = client.request(request.method.into(), &request.uri);
        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    async fn close(&self) -> Result<(), TransportError> {
        self.client
            .write()
            .await
            .take()
            .map(|_| info!("http transport released"))
            .ok_or(TransportError::Closed)
    }
}
