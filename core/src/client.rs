//! Entry point of the library.
//!
//! # Design
//! `Client` owns one transport shared by all services, so concurrent calls
//! reuse the same connection pool. Routes are bound to the configured base
//! URL once, here, and never change. The transport must be released with
//! [`Client::close`]; any call made afterwards fails with
//! `ClientError::Closed`.

use std::sync::Arc;

use crate::endpoints::{Endpoints, DEFAULT_BASE_URL};
use crate::error::ClientError;
use crate::http::HttpService;
use crate::services::{CharacterService, RaidService};
use crate::transport::{ReqwestTransport, Transport};

pub const BASE_URL_ENV: &str = "BLUEARCHIVE_API_URL";
pub const USER_AGENT_ENV: &str = "BLUEARCHIVE_USER_AGENT";

/// Connection settings for a [`Client`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("bluearchive-core/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `BLUEARCHIVE_API_URL` and `BLUEARCHIVE_USER_AGENT`, falling back
    /// to the defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var(BASE_URL_ENV).unwrap_or(defaults.base_url),
            user_agent: std::env::var(USER_AGENT_ENV).unwrap_or(defaults.user_agent),
        }
        .normalized()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalized()
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    fn normalized(mut self) -> Self {
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Asynchronous client for the Blue Archive API.
pub struct Client {
    http: HttpService,
    character: CharacterService,
    raid: RaidService,
}

impl Client {
    /// Client for the public API with the default configuration.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Client over a caller-provided transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let config = config.normalized();
        let http = HttpService::new(transport);
        let endpoints = Arc::new(Endpoints::new(&config.base_url));

        Self {
            character: CharacterService::new(http.clone(), Arc::clone(&endpoints)),
            raid: RaidService::new(http.clone(), endpoints),
            http,
        }
    }

    pub fn character(&self) -> &CharacterService {
        &self.character
    }

    pub fn raid(&self) -> &RaidService {
        &self.raid
    }

    /// Release the transport. Must be called exactly once.
    pub async fn close(&self) -> Result<(), ClientError> {
        self.http.close().await
    }
}
