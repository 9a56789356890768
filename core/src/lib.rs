//! Asynchronous typed client for the Blue Archive game-data API.
//!
//! # Overview
//! Fetches character rosters, character details and raid schedules, and maps
//! the JSON payloads onto typed models. Every remote operation returns
//! `Result<ApiResult<T>, ClientError>`: the outer `Err` is a mistake on the
//! caller's side (missing arguments, closed client) or a payload that no
//! longer matches the models; the inner `ApiResult` is the remote outcome.
//!
//! # Design
//! - `Route` templates are bound once per client; filling one yields a
//!   `ConcreteRequest`, a plain value describing the exchange.
//! - The network sits behind the `Transport` trait. `ReqwestTransport` is the
//!   default; tests and hosts can provide their own.
//! - `HttpService` normalizes raw responses into success/error envelopes;
//!   the `serializer` module turns success payloads into models.
//! - No retries, caching, rate limiting or timeouts are applied here.
//!
//! ```no_run
//! # async fn run() -> Result<(), bluearchive_core::ClientError> {
//! use bluearchive_core::{Client, CharacterQuery, Role};
//!
//! let client = Client::new()?;
//! let result = client
//!     .character()
//!     .get_character_by_query(&CharacterQuery::new().role(Role::Healer))
//!     .await?;
//! if result.is_success() {
//!     for character in result.value() {
//!         println!("{:?}", character.base.name);
//!     }
//! }
//! client.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod enums;
pub mod error;
pub mod http;
pub mod models;
pub mod result;
pub mod route;
pub mod serializer;
pub mod services;
pub mod transport;

pub use client::{Client, ClientConfig};
pub use endpoints::{Endpoints, DEFAULT_BASE_URL};
pub use enums::{Position, Rarity, Role};
pub use error::{ClientError, TransportError};
pub use http::{HttpErrorResponse, HttpMethod, HttpResponse, HttpService, HttpSuccessResponse};
pub use models::{
    BaseCharacter, Character, CharacterDetails, CharacterInfo, Characters, CommonModel, Image,
    Raid, Raids, Skills, Stats, Terrain, TerrainDetails,
};
pub use result::ApiResult;
pub use route::{ConcreteRequest, PathValue, Route};
pub use services::{CharacterLookup, CharacterQuery, CharacterService, RaidService, Region};
pub use transport::{ReqwestTransport, Transport};
