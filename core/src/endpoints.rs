//! Route table for the Blue Archive API.

use crate::http::HttpMethod;
use crate::route::Route;

pub const DEFAULT_BASE_URL: &str = "https://api.ennead.cc/buruaka";

const JP_SUFFIX: &str = "?region=japan";

/// Every route the client can dispatch, bound to one base URL when the
/// client is constructed.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub all_characters: Route,
    pub all_characters_jp: Route,
    pub character: Route,
    pub character_jp: Route,
    pub character_query: Route,
    pub raids: Route,
    pub raids_jp: Route,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let character = format!("{base}/character");
        let raid = format!("{base}/raid");

        Self {
            all_characters: Route::new(HttpMethod::Get, character.clone()),
            all_characters_jp: Route::new(HttpMethod::Get, format!("{character}{JP_SUFFIX}")),
            character: Route::new(HttpMethod::Get, format!("{character}/{{}}")),
            character_jp: Route::new(HttpMethod::Get, format!("{character}/{{}}{JP_SUFFIX}")),
            character_query: Route::new(HttpMethod::Get, format!("{character}/query")),
            raids: Route::new(HttpMethod::Get, raid.clone()),
            raids_jp: Route::new(HttpMethod::Get, format!("{raid}{JP_SUFFIX}")),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
