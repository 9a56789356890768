//! Per-entity services. Every operation has the same shape: build a
//! `ConcreteRequest` from a route, send it through the shared `HttpService`,
//! and deserialize the payload of a success envelope.

mod character;
mod raid;

pub use character::{CharacterLookup, CharacterQuery, CharacterService};
pub use raid::RaidService;

use serde_json::Value;

use crate::error::ClientError;
use crate::http::HttpService;
use crate::result::ApiResult;
use crate::route::ConcreteRequest;

/// Which regional dataset to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Global,
    Japan,
}

/// Send `request` and turn the envelope into an `ApiResult`.
///
/// Remote failures become `ApiResult::Error`; a payload that does not fit
/// the model is returned as `Err` because it means the API contract changed.
async fn dispatch<T>(
    http: &HttpService,
    request: ConcreteRequest,
    deserialize: fn(Value) -> Result<T, ClientError>,
) -> Result<ApiResult<T>, ClientError> {
    match http.fetch(&request).await? {
        Ok(success) => Ok(ApiResult::Success(deserialize(success.data)?)),
        Err(error) => Ok(ApiResult::Error(error)),
    }
}
