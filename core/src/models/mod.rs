//! Typed models for API payloads.
//!
//! # Design
//! Every struct derives `Default` and is marked `#[serde(default)]`, so any
//! key the API omits simply stays `None` / empty. Wire keys are camelCase;
//! `#[serde(rename_all = "camelCase")]` is the field-to-key table, with
//! explicit renames where the API breaks its own convention.

mod character;
mod raid;

pub use character::{
    BaseCharacter, Character, CharacterDetails, CharacterInfo, Characters, CommonModel, Image,
    Skills, Stats, Terrain, TerrainDetails,
};
pub use raid::{Raid, Raids};
