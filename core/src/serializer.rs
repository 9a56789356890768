//! Mapping of JSON payloads onto the typed models.
//!
//! # Design
//! Deserialization is total over sparse objects: a missing key, or an
//! explicit `null`, leaves the field at its default. Nested objects that are
//! absent deserialize as if they were `{}`; absent lists become empty. A key
//! that is present with the wrong JSON type is still a fault and surfaces as
//! `ClientError::Deserialization`; the API contract is assumed stable and this
//! is not a schema validator.
//!
//! The per-field conversions that serde's derive cannot express on its own
//! live here as `deserialize_with` helpers referenced from the models.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::ClientError;
use crate::models::{Character, CharacterDetails, Characters, Raid, Raids};

/// Deserialize any model from a success payload.
pub fn deserialize<T: DeserializeOwned>(data: Value) -> Result<T, ClientError> {
    Ok(serde_json::from_value(data)?)
}

pub fn deserialize_character(data: Value) -> Result<Character, ClientError> {
    deserialize(data)
}

/// Payload of the list endpoints. A missing list (`null`) is empty.
pub fn deserialize_characters(data: Value) -> Result<Characters, ClientError> {
    deserialize_list(data, "a list of characters", deserialize_character)
}

/// Payload of the query endpoint: the same shape as the list endpoint, but
/// each entry may carry fewer fields.
pub fn deserialize_characters_from_query(data: Value) -> Result<Characters, ClientError> {
    deserialize_characters(data)
}

pub fn deserialize_character_details(data: Value) -> Result<CharacterDetails, ClientError> {
    deserialize(data)
}

pub fn deserialize_raid(data: Value) -> Result<Raid, ClientError> {
    deserialize(data)
}

pub fn deserialize_raids(data: Value) -> Result<Raids, ClientError> {
    deserialize(data)
}

fn deserialize_list<T>(
    data: Value,
    expected: &'static str,
    element: fn(Value) -> Result<T, ClientError>,
) -> Result<Vec<T>, ClientError> {
    match data {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.into_iter().map(element).collect(),
        other => Err(ClientError::Deserialization(serde::de::Error::invalid_type(
            unexpected(&other),
            &expected,
        ))),
    }
}

fn unexpected(value: &Value) -> serde::de::Unexpected<'_> {
    use serde::de::Unexpected;
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// `null` behaves like a missing key: the field takes its default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep only the first element of a list; an empty or missing list is `None`.
pub(crate) fn first_element<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.and_then(|items| items.into_iter().next()))
}

/// Inverse of `first_element`: write the value back as a zero- or one-element list.
pub(crate) fn single_element<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    value.iter().collect::<Vec<_>>().serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Position, Rarity, Role};
    use crate::models::{Terrain, TerrainDetails};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn aru() -> Value {
        json!({
            "id": 10000,
            "name": "Aru",
            "profile": "President of Problem Solver 68.",
            "rarity": "SSR",
            "baseStar": 3,
            "position": "Back",
            "role": "Dealer",
            "armorType": "Light Armor",
            "bulletType": "Explosion",
            "weaponType": "SR",
            "squadType": "Main",
            "school": "Gehenna",
            "terrain": {
                "urban": {"DamageDealt": "120%", "ShieldBlockRate": "30%"},
                "outdoor": {"DamageDealt": "100%", "ShieldBlockRate": "0%"},
                "indoor": {"DamageDealt": "80%", "ShieldBlockRate": "0%"}
            }
        })
    }

    #[test]
    fn character_from_list_payload() {
        let character = deserialize_character(aru()).unwrap();
        assert_eq!(character.id, Some(10000));
        assert_eq!(character.base.name.as_deref(), Some("Aru"));
        assert_eq!(character.base.base_star, Some(3));
        assert_eq!(character.base.rarity, Some(Rarity::SuperSuperRare));
        assert_eq!(character.base.position, Some(Position::Back));
        assert_eq!(character.base.role, Some(Role::Dealer));
        assert_eq!(character.base.armor_type.as_deref(), Some("Light Armor"));
        assert_eq!(character.base.squad_type.as_deref(), Some("Main"));
        assert_eq!(character.school.as_deref(), Some("Gehenna"));
        assert_eq!(character.terrain.urban.damage_dealt, "120%");
        assert_eq!(character.terrain.urban.shield_block_rate, "30%");
        assert_eq!(character.terrain.indoor.damage_dealt, "80%");
    }

    #[test]
    fn healer_back_ssr() {
        let data = json!({
            "position": "Back", "role": "Healer", "rarity": "SSR",
            "id": 1, "name": "N", "baseStar": 3
        });
        let character = deserialize_character(data).unwrap();
        assert_eq!(character.base.position, Some(Position::Back));
        assert_eq!(character.base.role, Some(Role::Healer));
        assert_eq!(character.base.rarity, Some(Rarity::SuperSuperRare));
    }

    #[test]
    fn empty_object_yields_defaults() {
        let character = deserialize_character(json!({})).unwrap();
        assert_eq!(character, Character::default());
        assert_eq!(character.terrain.outdoor.damage_dealt, "");

        let details = deserialize_character_details(json!({})).unwrap();
        assert_eq!(details, CharacterDetails::default());
        assert!(details.skills.ex.is_none());

        let raids = deserialize_raids(json!({})).unwrap();
        assert!(raids.current.is_empty() && raids.upcoming.is_empty() && raids.ended.is_empty());
    }

    #[test]
    fn nulls_behave_like_missing_keys() {
        let data = json!({
            "name": null,
            "rarity": null,
            "position": null,
            "terrain": {"urban": null, "outdoor": {"DamageDealt": null}}
        });
        let character = deserialize_character(data).unwrap();
        assert!(character.base.name.is_none());
        assert!(character.base.rarity.is_none());
        assert!(character.base.position.is_none());
        assert_eq!(character.terrain, Terrain::default());

        let raids = deserialize_raids(json!({"current": null, "ended": []})).unwrap();
        assert!(raids.current.is_empty());
    }

    #[test]
    fn unknown_rarity_is_absorbed() {
        let mut data = aru();
        data["rarity"] = json!("UR");
        let character = deserialize_character(data).unwrap();
        assert_eq!(character.base.rarity, Some(Rarity::Unknown));
    }

    #[test]
    fn unknown_position_is_a_fault() {
        let mut data = aru();
        data["position"] = json!("Sideline");
        let err = deserialize_character(data).unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));
    }

    #[test]
    fn wrong_type_is_a_fault() {
        let err = deserialize_character(json!({"baseStar": "three"})).unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));

        let err = deserialize_characters(json!({"name": "Aru"})).unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));
    }

    #[test]
    fn character_list_maps_each_element() {
        let characters = deserialize_characters(json!([aru(), {"id": 2, "name": "Haruka"}])).unwrap();
        assert_eq!(characters.len(), 2);
        assert_eq!(characters[1].id, Some(2));
        assert!(characters[1].base.role.is_none());

        assert!(deserialize_characters(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn character_list_rejects_non_array() {
        let err = deserialize_characters(json!({"id": 1})).unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));
        assert!(err.to_string().contains("expected a list of characters"), "{err}");
    }

    #[test]
    fn details_nest_base_character_and_rename_irregular_keys() {
        let data = json!({
            "id": 10000,
            "isReleased": true,
            "isPlayable": true,
            "character": {"name": "Aru", "rarity": "SSR", "position": "Back", "role": "Dealer"},
            "info": {"age": "16", "birthDate": "3/12", "schoolYear": "2nd Year", "voiceActor": "Kondou Reina"},
            "image": {"icon": "icon.png", "lobby": "lobby.png", "portrait": "portrait.png"},
            "stat": {
                "attackLevel1": 437, "attackLevel100": 4368,
                "maxHPLevel1": 2207, "maxHPLevel100": 22069,
                "defPenetrateLevel1": 0, "ammoCount": 5, "moveSpeed": 200,
                "streetMood": "A", "indoorMood": "C"
            },
            "terrain": {"urban": {"DamageDealt": "120%", "ShieldBlockRate": "30%"}}
        });

        let details = deserialize_character_details(data).unwrap();
        assert_eq!(details.id, Some(10000));
        assert_eq!(details.is_released, Some(true));
        assert_eq!(details.base.name.as_deref(), Some("Aru"));
        assert_eq!(details.base.rarity, Some(Rarity::SuperSuperRare));
        assert_eq!(details.info.birth_date.as_deref(), Some("3/12"));
        assert_eq!(details.info.voice_actor.as_deref(), Some("Kondou Reina"));
        assert!(details.info.artist.is_none());
        assert_eq!(details.image.portrait.as_deref(), Some("portrait.png"));
        assert_eq!(details.stats.max_hp_level1, Some(2207));
        assert_eq!(details.stats.max_hp_level100, Some(22069));
        assert_eq!(details.stats.attack_level100, Some(4368));
        assert_eq!(details.stats.move_speed, Some(200));
        assert!(details.stats.outdoor_mood.is_none());
        assert_eq!(details.terrain.urban.damage_dealt, "120%");
        assert_eq!(details.terrain.indoor, TerrainDetails::default());
    }

    #[test]
    fn skills_keep_only_the_first_entry() {
        let data = json!({
            "skills": {
                "ex": [
                    {"id": 1, "name": "A", "description": "d"},
                    {"id": 2, "name": "B", "description": "e"}
                ],
                "normal": [],
                "passive": [{"id": 3, "name": "C"}]
            }
        });

        let details = deserialize_character_details(data).unwrap();
        let ex = details.skills.ex.unwrap();
        assert_eq!(ex.id, Some(1));
        assert_eq!(ex.name.as_deref(), Some("A"));
        assert_eq!(ex.description.as_deref(), Some("d"));
        assert!(details.skills.normal.is_none());
        assert_eq!(details.skills.passive.unwrap().description, None);
        assert!(details.skills.sub.is_none());
    }

    #[test]
    fn skills_serialize_back_as_lists() {
        let details = deserialize_character_details(json!({
            "skills": {"ex": [{"id": 1, "name": "A", "description": "d"}]}
        }))
        .unwrap();

        let wire = serde_json::to_value(&details.skills).unwrap();
        assert_eq!(wire["ex"], json!([{"id": 1, "name": "A", "description": "d"}]));
        assert_eq!(wire["sub"], json!([]));
    }

    #[test]
    fn raid_timestamps_are_unix_millis() {
        let raid = deserialize_raid(json!({
            "seasonId": 42,
            "bossName": "Binah",
            "startAt": 1_700_000_000_000_i64,
            "endAt": null
        }))
        .unwrap();

        assert_eq!(raid.season_id, Some(42));
        assert_eq!(raid.boss_name.as_deref(), Some("Binah"));
        assert_eq!(
            raid.start_at,
            Some(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap())
        );
        assert!(raid.settle_at.is_none());
        assert!(raid.end_at.is_none());
    }

    #[test]
    fn raids_keep_status_order() {
        let raids = deserialize_raids(json!({
            "current": [{"bossName": "Hieronymus"}],
            "upcoming": [{"bossName": "Kaiten"}, {"bossName": "Perorodzilla"}]
        }))
        .unwrap();

        assert_eq!(raids.current.len(), 1);
        let upcoming: Vec<_> = raids
            .upcoming
            .iter()
            .map(|r| r.boss_name.as_deref().unwrap())
            .collect();
        assert_eq!(upcoming, ["Kaiten", "Perorodzilla"]);
        assert!(raids.ended.is_empty());
    }
}
