//! Closed sets of wire values used by character models and queries.
//!
//! # Design
//! `Position` and `Role` are strict: callers filter on them, so a value the
//! client has never seen is surfaced as a deserialization fault instead of
//! being silently dropped. `Rarity` is best-effort: new rarities appear with
//! game updates and map to `Rarity::Unknown` rather than breaking every
//! character listing.
//!
//! Wire values are already display strings (`"Back"`, `"T.S."`, `"SSR"`), so
//! no case translation happens at this layer.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Back,
    Front,
    Middle,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Back, Position::Front, Position::Middle];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Back => "Back",
            Position::Front => "Front",
            Position::Middle => "Middle",
        }
    }
}

impl FromStr for Position {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ClientError::unknown_variant("position", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Dealer,
    Healer,
    Support,
    Tank,
    #[serde(rename = "T.S.")]
    TacticalSupport,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Dealer,
        Role::Healer,
        Role::Support,
        Role::Tank,
        Role::TacticalSupport,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Dealer => "Dealer",
            Role::Healer => "Healer",
            Role::Support => "Support",
            Role::Tank => "Tank",
            Role::TacticalSupport => "T.S.",
        }
    }
}

impl FromStr for Role {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ClientError::unknown_variant("role", s))
    }
}

/// Student rarity. Values the client does not know deserialize to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "R")]
    Rare,
    #[serde(rename = "SR")]
    SuperRare,
    #[serde(rename = "SSR")]
    SuperSuperRare,
    #[serde(other)]
    Unknown,
}

impl Rarity {
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Rare => "R",
            Rarity::SuperRare => "SR",
            Rarity::SuperSuperRare => "SSR",
            Rarity::Unknown => "Unknown",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "R" => Rarity::Rare,
            "SR" => Rarity::SuperRare,
            "SSR" => Rarity::SuperSuperRare,
            _ => Rarity::Unknown,
        }
    }
}

impl FromStr for Rarity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Rarity::from_wire(s))
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display!(Position, Role, Rarity);
