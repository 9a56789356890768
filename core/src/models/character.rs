use serde::{Deserialize, Serialize};

use crate::enums::{Position, Rarity, Role};
use crate::serializer::{first_element, null_as_default, single_element};

/// Fields shared by every character payload.
///
/// The list endpoint sends these flat next to `id` and `school`; the detail
/// endpoint nests them under `character`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseCharacter {
    pub name: Option<String>,
    pub profile: Option<String>,
    pub rarity: Option<Rarity>,
    pub base_star: Option<u8>,
    pub position: Option<Position>,
    pub role: Option<Role>,
    pub armor_type: Option<String>,
    pub bullet_type: Option<String>,
    pub weapon_type: Option<String>,
    pub squad_type: Option<String>,
}

/// A character as returned by the list and query endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub id: Option<u32>,
    #[serde(flatten)]
    pub base: BaseCharacter,
    pub school: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub terrain: Terrain,
}

pub type Characters = Vec<Character>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Terrain {
    #[serde(deserialize_with = "null_as_default")]
    pub urban: TerrainDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub outdoor: TerrainDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub indoor: TerrainDetails,
}

/// Terrain modifiers, kept as the API's display strings (e.g. `"120%"`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainDetails {
    #[serde(rename = "DamageDealt", deserialize_with = "null_as_default")]
    pub damage_dealt: String,
    #[serde(rename = "ShieldBlockRate", deserialize_with = "null_as_default")]
    pub shield_block_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterInfo {
    pub age: Option<String>,
    pub birth_date: Option<String>,
    pub height: Option<String>,
    pub artist: Option<String>,
    pub club: Option<String>,
    pub school: Option<String>,
    pub school_year: Option<String>,
    pub voice_actor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub icon: Option<String>,
    pub lobby: Option<String>,
    pub portrait: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub attack_level1: Option<i64>,
    pub attack_level100: Option<i64>,
    #[serde(rename = "maxHPLevel1")]
    pub max_hp_level1: Option<i64>,
    #[serde(rename = "maxHPLevel100")]
    pub max_hp_level100: Option<i64>,
    pub defense_level1: Option<i64>,
    pub defense_level100: Option<i64>,
    pub heal_power_level1: Option<i64>,
    pub heal_power_level100: Option<i64>,
    pub def_penetrate_level1: Option<i64>,
    pub def_penetrate_level100: Option<i64>,
    pub ammo_count: Option<i64>,
    pub ammo_cost: Option<i64>,
    pub range: Option<i64>,
    pub move_speed: Option<i64>,
    pub street_mood: Option<String>,
    pub outdoor_mood: Option<String>,
    pub indoor_mood: Option<String>,
}

/// Generic (id, name, description) triple used by each skill category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonModel {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Skills by category. The API sends each category as a list; only the
/// first entry is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "first_element", serialize_with = "single_element")]
    pub ex: Option<CommonModel>,
    #[serde(deserialize_with = "first_element", serialize_with = "single_element")]
    pub normal: Option<CommonModel>,
    #[serde(deserialize_with = "first_element", serialize_with = "single_element")]
    pub passive: Option<CommonModel>,
    #[serde(deserialize_with = "first_element", serialize_with = "single_element")]
    pub sub: Option<CommonModel>,
}

/// Everything the detail endpoint knows about one character.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterDetails {
    pub id: Option<u32>,
    pub is_released: Option<bool>,
    pub is_playable: Option<bool>,
    #[serde(rename = "character", deserialize_with = "null_as_default")]
    pub base: BaseCharacter,
    #[serde(deserialize_with = "null_as_default")]
    pub info: CharacterInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub image: Image,
    #[serde(rename = "stat", deserialize_with = "null_as_default")]
    pub stats: Stats,
    #[serde(deserialize_with = "null_as_default")]
    pub terrain: Terrain,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Skills,
}
