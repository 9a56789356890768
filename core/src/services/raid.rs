use std::sync::Arc;

use crate::endpoints::Endpoints;
use crate::error::ClientError;
use crate::http::HttpService;
use crate::models::Raids;
use crate::result::ApiResult;
use crate::route::ConcreteRequest;
use crate::serializer;

use super::{dispatch, Region};

/// Raid schedule operations.
#[derive(Clone)]
pub struct RaidService {
    http: HttpService,
    endpoints: Arc<Endpoints>,
}

impl RaidService {
    pub fn new(http: HttpService, endpoints: Arc<Endpoints>) -> Self {
        Self { http, endpoints }
    }

    pub fn build_get_raids(&self, region: Region) -> Result<ConcreteRequest, ClientError> {
        let route = match region {
            Region::Global => &self.endpoints.raids,
            Region::Japan => &self.endpoints.raids_jp,
        };
        route.generate_route(None)
    }

    pub async fn get_raids(&self) -> Result<ApiResult<Raids>, ClientError> {
        self.get_raids_in(Region::Global).await
    }

    pub async fn get_raids_jp(&self) -> Result<ApiResult<Raids>, ClientError> {
        self.get_raids_in(Region::Japan).await
    }

    pub async fn get_raids_in(&self, region: Region) -> Result<ApiResult<Raids>, ClientError> {
        let request = self.build_get_raids(region)?;
        dispatch(&self.http, request, serializer::deserialize_raids).await
    }
}
