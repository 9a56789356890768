use std::sync::Arc;

use crate::endpoints::Endpoints;
use crate::enums::{Position, Role};
use crate::error::ClientError;
use crate::http::HttpService;
use crate::models::{CharacterDetails, Characters};
use crate::result::ApiResult;
use crate::route::{ConcreteRequest, PathValue};
use crate::serializer;

use super::{dispatch, Region};

/// Identifies one character by name or numeric id.
///
/// Construction is the precondition check: at least one of the two must be
/// given. When both are, the name wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterLookup(PathValue);

impl CharacterLookup {
    pub fn new(name: Option<&str>, id: Option<u32>) -> Result<Self, ClientError> {
        match (name.filter(|n| !n.is_empty()), id) {
            (Some(name), _) => Ok(Self(PathValue::Name(name.to_string()))),
            (None, Some(id)) => Ok(Self(PathValue::Id(id))),
            (None, None) => Err(ClientError::MissingArgument("name or id")),
        }
    }

    pub fn by_name(name: &str) -> Result<Self, ClientError> {
        Self::new(Some(name), None)
    }

    pub fn by_id(id: u32) -> Self {
        Self(PathValue::Id(id))
    }

    pub fn path_value(&self) -> &PathValue {
        &self.0
    }

    /// `id=true` tells the API to read the path segment as an id, not a name.
    fn params(&self) -> Vec<(&'static str, &'static str)> {
        match self.0 {
            PathValue::Id(_) => vec![("id", "true")],
            PathValue::Name(_) => Vec::new(),
        }
    }
}

/// Filters for the character query endpoint. Unset (or empty) filters are
/// sent as empty strings; at least one must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterQuery {
    pub role: Option<Role>,
    pub kind: Option<String>,
    pub school: Option<String>,
    pub club: Option<String>,
    pub position: Option<Position>,
    pub weapon: Option<String>,
    pub damage: Option<String>,
    pub armor: Option<String>,
}

impl CharacterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Sent as the `type` parameter.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    pub fn club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn weapon(mut self, weapon: impl Into<String>) -> Self {
        self.weapon = Some(weapon.into());
        self
    }

    pub fn damage(mut self, damage: impl Into<String>) -> Self {
        self.damage = Some(damage.into());
        self
    }

    pub fn armor(mut self, armor: impl Into<String>) -> Self {
        self.armor = Some(armor.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.is_empty())
    }

    /// All eight parameters in wire order, or `MissingArgument` if none is set.
    pub fn to_params(&self) -> Result<Vec<(&'static str, String)>, ClientError> {
        if self.is_empty() {
            return Err(ClientError::MissingArgument("character query filter"));
        }
        Ok(self
            .entries()
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect())
    }

    fn entries(&self) -> [(&'static str, &str); 8] {
        fn text(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("")
        }
        [
            ("role", self.role.map(Role::as_str).unwrap_or("")),
            ("type", text(&self.kind)),
            ("school", text(&self.school)),
            ("club", text(&self.club)),
            ("position", self.position.map(Position::as_str).unwrap_or("")),
            ("weapon", text(&self.weapon)),
            ("damage", text(&self.damage)),
            ("armor", text(&self.armor)),
        ]
    }
}

/// Character roster, detail and query operations.
#[derive(Clone)]
pub struct CharacterService {
    http: HttpService,
    endpoints: Arc<Endpoints>,
}

impl CharacterService {
    pub fn new(http: HttpService, endpoints: Arc<Endpoints>) -> Self {
        Self { http, endpoints }
    }

    pub fn build_get_all_characters(&self, region: Region) -> Result<ConcreteRequest, ClientError> {
        let route = match region {
            Region::Global => &self.endpoints.all_characters,
            Region::Japan => &self.endpoints.all_characters_jp,
        };
        route.generate_route(None)
    }

    pub fn build_get_character(
        &self,
        lookup: &CharacterLookup,
        region: Region,
    ) -> Result<ConcreteRequest, ClientError> {
        let route = match region {
            Region::Global => &self.endpoints.character,
            Region::Japan => &self.endpoints.character_jp,
        };
        Ok(route
            .generate_route(Some(lookup.path_value()))?
            .with_params(lookup.params()))
    }

    pub fn build_get_character_by_query(
        &self,
        query: &CharacterQuery,
    ) -> Result<ConcreteRequest, ClientError> {
        let params = query.to_params()?;
        Ok(self
            .endpoints
            .character_query
            .generate_route(None)?
            .with_params(params))
    }

    pub async fn get_all_characters(&self) -> Result<ApiResult<Characters>, ClientError> {
        self.get_all_characters_in(Region::Global).await
    }

    pub async fn get_all_characters_jp(&self) -> Result<ApiResult<Characters>, ClientError> {
        self.get_all_characters_in(Region::Japan).await
    }

    pub async fn get_all_characters_in(
        &self,
        region: Region,
    ) -> Result<ApiResult<Characters>, ClientError> {
        let request = self.build_get_all_characters(region)?;
        dispatch(&self.http, request, serializer::deserialize_characters).await
    }

    /// Fetch one character by name or id. Fails with `MissingArgument`,
    /// without touching the network, if both are `None`.
    pub async fn get_character(
        &self,
        name: Option<&str>,
        id: Option<u32>,
    ) -> Result<ApiResult<CharacterDetails>, ClientError> {
        let lookup = CharacterLookup::new(name, id)?;
        self.get_character_in(&lookup, Region::Global).await
    }

    /// Japanese-region variant of [`get_character`](Self::get_character).
    /// Names must be given in Japanese.
    pub async fn get_character_jp(
        &self,
        name: Option<&str>,
        id: Option<u32>,
    ) -> Result<ApiResult<CharacterDetails>, ClientError> {
        let lookup = CharacterLookup::new(name, id)?;
        self.get_character_in(&lookup, Region::Japan).await
    }

    pub async fn get_character_in(
        &self,
        lookup: &CharacterLookup,
        region: Region,
    ) -> Result<ApiResult<CharacterDetails>, ClientError> {
        let request = self.build_get_character(lookup, region)?;
        dispatch(&self.http, request, serializer::deserialize_character_details).await
    }

    pub async fn get_character_by_query(
        &self,
        query: &CharacterQuery,
    ) -> Result<ApiResult<Characters>, ClientError> {
        let request = self.build_get_character_by_query(query)?;
        dispatch(&self.http, request, serializer::deserialize_characters_from_query).await
    }
}
