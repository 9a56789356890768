//! In-process stand-in for the Blue Archive API.
//!
//! Serves a small fixed roster in the same wire format as the real API
//! (camelCase keys, `PascalCase` terrain keys, skills as lists, raid times in
//! unix milliseconds). Errors are `{"error": "..."}` bodies.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// One student in both regional variants.
#[derive(Clone, Debug)]
pub struct Student {
    pub id: u32,
    pub name: &'static str,
    pub name_jp: &'static str,
    pub rarity: &'static str,
    pub position: &'static str,
    pub role: &'static str,
    pub school: &'static str,
    pub club: &'static str,
    pub weapon: &'static str,
    pub armor: &'static str,
    pub damage: &'static str,
    pub squad: &'static str,
}

pub const ROSTER: &[Student] = &[
    Student {
        id: 10000,
        name: "Aru",
        name_jp: "アル",
        rarity: "SSR",
        position: "Back",
        role: "Dealer",
        school: "Gehenna",
        club: "Problem Solver 68",
        weapon: "SR",
        armor: "Light Armor",
        damage: "Explosion",
        squad: "Main",
    },
    Student {
        id: 10005,
        name: "Hoshino",
        name_jp: "ホシノ",
        rarity: "SSR",
        position: "Front",
        role: "Tank",
        school: "Abydos",
        club: "Foreclosure Task Force",
        weapon: "SG",
        armor: "Heavy Armor",
        damage: "Piercing",
        squad: "Main",
    },
    Student {
        id: 13003,
        name: "Serina",
        name_jp: "セリナ",
        rarity: "R",
        position: "Back",
        role: "Healer",
        school: "Trinity",
        club: "Remedial Knights",
        weapon: "AR",
        armor: "Light Armor",
        damage: "Explosion",
        squad: "Support",
    },
    Student {
        id: 20008,
        name: "Ui",
        name_jp: "ウイ",
        rarity: "SSR",
        position: "Back",
        role: "T.S.",
        school: "Trinity",
        club: "Library Committee",
        weapon: "SR",
        armor: "Special Armor",
        damage: "Mystic",
        squad: "Support",
    },
];

#[derive(Clone)]
pub struct AppState {
    roster: Arc<Vec<Student>>,
}

pub fn app() -> Router {
    app_with_roster(ROSTER.to_vec())
}

pub fn app_with_roster(roster: Vec<Student>) -> Router {
    let state = AppState {
        roster: Arc::new(roster),
    };
    Router::new()
        .route("/character", get(list_characters))
        .route("/character/query", get(query_characters))
        .route("/character/{name_or_id}", get(get_character))
        .route("/raid", get(list_raids))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

#[derive(Debug, Default, Deserialize)]
pub struct RegionParams {
    pub region: Option<String>,
    pub id: Option<String>,
}

impl RegionParams {
    fn japan(&self) -> bool {
        self.region.as_deref() == Some("japan")
    }
}

type ApiError = (StatusCode, Json<Value>);

fn error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}

fn terrain() -> Value {
    json!({
        "urban": {"DamageDealt": "120%", "ShieldBlockRate": "30%"},
        "outdoor": {"DamageDealt": "100%", "ShieldBlockRate": "0%"},
        "indoor": {"DamageDealt": "80%", "ShieldBlockRate": "0%"}
    })
}

fn base_fields(student: &Student, japan: bool) -> serde_json::Map<String, Value> {
    let name = if japan { student.name_jp } else { student.name };
    let base_star = if student.rarity == "SSR" { 3 } else { 1 };
    let value = json!({
        "name": name,
        "profile": format!("{} of {}.", student.name, student.club),
        "rarity": student.rarity,
        "baseStar": base_star,
        "position": student.position,
        "role": student.role,
        "armorType": student.armor,
        "bulletType": student.damage,
        "weaponType": student.weapon,
        "squadType": student.squad
    });
    match value {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

/// List-endpoint shape: base fields flattened next to id, school and terrain.
pub fn character_summary(student: &Student, japan: bool) -> Value {
    let mut map = base_fields(student, japan);
    map.insert("id".to_string(), json!(student.id));
    map.insert("school".to_string(), json!(student.school));
    map.insert("terrain".to_string(), terrain());
    Value::Object(map)
}

/// Detail-endpoint shape: base fields nested under `character`.
pub fn character_details(student: &Student, japan: bool) -> Value {
    json!({
        "id": student.id,
        "isReleased": true,
        "isPlayable": true,
        "character": base_fields(student, japan),
        "info": {
            "age": "16",
            "birthDate": "3/12",
            "height": "150cm",
            "artist": "Doremi",
            "club": student.club,
            "school": student.school,
            "schoolYear": "2nd Year",
            "voiceActor": "Kondou Reina"
        },
        "image": {
            "icon": format!("https://cdn.example/icon/{}.png", student.id),
            "lobby": format!("https://cdn.example/lobby/{}.png", student.id),
            "portrait": format!("https://cdn.example/portrait/{}.png", student.id)
        },
        "stat": {
            "id": student.id,
            "attackLevel1": 437,
            "attackLevel100": 4368,
            "maxHPLevel1": 2207,
            "maxHPLevel100": 22069,
            "defenseLevel1": 19,
            "defenseLevel100": 119,
            "healPowerLevel1": 1650,
            "healPowerLevel100": 4719,
            "defPenetrateLevel1": 0,
            "defPenetrateLevel100": 0,
            "ammoCount": 5,
            "ammoCost": 1,
            "range": 750,
            "moveSpeed": 200,
            "streetMood": "A",
            "outdoorMood": "B",
            "indoorMood": "C"
        },
        "terrain": terrain(),
        "skills": {
            "ex": [
                {"id": 1, "name": "Hard-Boiled Shot", "description": "Deals damage."},
                {"id": 2, "name": "Hard-Boiled Shot+", "description": "Deals more damage."}
            ],
            "normal": [{"id": 3, "name": "Rain of Bullets", "description": "Every 30 seconds."}],
            "passive": [{"id": 4, "name": "Boss Mode", "description": "ATK up."}],
            "sub": [{"id": 5, "name": "Outlaw's Resolve", "description": "CRIT up."}]
        }
    })
}

async fn list_characters(
    State(state): State<AppState>,
    Query(params): Query<RegionParams>,
) -> Json<Value> {
    let japan = params.japan();
    Json(Value::Array(
        state
            .roster
            .iter()
            .map(|s| character_summary(s, japan))
            .collect(),
    ))
}

async fn get_character(
    State(state): State<AppState>,
    Path(name_or_id): Path<String>,
    Query(params): Query<RegionParams>,
) -> Result<Json<Value>, ApiError> {
    let japan = params.japan();
    let by_id = params.id.as_deref() == Some("true");

    let found = if by_id {
        let id: u32 = name_or_id
            .parse()
            .map_err(|_| error(StatusCode::BAD_REQUEST, "Invalid character id"))?;
        state.roster.iter().find(|s| s.id == id)
    } else {
        state.roster.iter().find(|s| {
            let name = if japan { s.name_jp } else { s.name };
            name.eq_ignore_ascii_case(&name_or_id)
        })
    };

    found
        .map(|s| Json(character_details(s, japan)))
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Character not found"))
}

async fn query_characters(
    State(state): State<AppState>,
    Query(filters): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let active: Vec<(&str, &str)> = filters
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    if active.is_empty() {
        return Err(error(
            StatusCode::BAD_REQUEST,
            "At least one query parameter is required",
        ));
    }

    let matches = state
        .roster
        .iter()
        .filter(|s| active.iter().all(|&(key, value)| field(s, key) == Some(value)))
        .map(|s| character_summary(s, false))
        .collect();
    Ok(Json(Value::Array(matches)))
}

fn field<'a>(student: &'a Student, key: &str) -> Option<&'a str> {
    match key {
        "role" => Some(student.role),
        "type" => Some(student.squad),
        "school" => Some(student.school),
        "club" => Some(student.club),
        "position" => Some(student.position),
        "weapon" => Some(student.weapon),
        "damage" => Some(student.damage),
        "armor" => Some(student.armor),
        _ => None,
    }
}

async fn list_raids(Query(params): Query<RegionParams>) -> Json<Value> {
    let (current, upcoming) = if params.japan() {
        ("ビナー", "ヒエロニムス")
    } else {
        ("Binah", "Hieronymus")
    };
    Json(json!({
        "current": [{
            "seasonId": 42,
            "bossName": current,
            "startAt": 1_700_000_000_000_i64,
            "settleAt": 1_700_500_000_000_i64,
            "endAt": 1_700_600_000_000_i64
        }],
        "upcoming": [{
            "seasonId": 43,
            "bossName": upcoming,
            "startAt": 1_701_000_000_000_i64,
            "settleAt": null,
            "endAt": null
        }],
        "ended": []
    }))
}
