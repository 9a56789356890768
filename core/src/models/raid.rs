use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serializer::null_as_default;

/// One raid season. Timestamps arrive as unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Raid {
    pub season_id: Option<u32>,
    pub boss_name: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub settle_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub end_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Raids {
    #[serde(deserialize_with = "null_as_default")]
    pub current: Vec<Raid>,
    #[serde(deserialize_with = "null_as_default")]
    pub upcoming: Vec<Raid>,
    #[serde(deserialize_with = "null_as_default")]
    pub ended: Vec<Raid>,
}
