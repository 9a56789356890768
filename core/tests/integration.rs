//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every client
//! operation over real HTTP through the default `ReqwestTransport`. Validates
//! that route building, envelope normalization and deserialization agree
//! with the wire format the server emits.

use axum::http::{header, HeaderMap, HeaderName, Method, Uri};
use axum::{Json, Router};
use bluearchive_core::{
    Client, ClientConfig, ClientError, CharacterQuery, HttpMethod, PathValue, Position, Rarity,
    ReqwestTransport, Role, Route, Transport,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

/// Reflects every request back as JSON, for checking what actually went out.
async fn start_echo_server() -> String {
    async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Value> {
        let get = |name: HeaderName| headers.get(name).and_then(|v| v.to_str().ok());
        Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "userAgent": get(header::USER_AGENT),
            "contentType": get(header::CONTENT_TYPE),
            "body": serde_json::from_str::<Value>(&body).unwrap_or(Value::Null),
        }))
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().fallback(echo)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn client() -> Client {
    let base_url = start_server().await;
    Client::with_config(ClientConfig::default().with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn list_all_characters() {
    let client = client().await;

    let result = client.character().get_all_characters().await.unwrap();
    let characters = result.value();
    assert_eq!(characters.len(), 4);

    let aru = &characters[0];
    assert_eq!(aru.id, Some(10000));
    assert_eq!(aru.base.name.as_deref(), Some("Aru"));
    assert_eq!(aru.base.rarity, Some(Rarity::SuperSuperRare));
    assert_eq!(aru.base.position, Some(Position::Back));
    assert_eq!(aru.school.as_deref(), Some("Gehenna"));
    assert_eq!(aru.terrain.urban.damage_dealt, "120%");

    let ui = &characters[3];
    assert_eq!(ui.base.role, Some(Role::TacticalSupport));

    client.close().await.unwrap();
}

#[tokio::test]
async fn list_all_characters_jp() {
    let client = client().await;

    let result = client.character().get_all_characters_jp().await.unwrap();
    assert_eq!(result.value()[0].base.name.as_deref(), Some("アル"));

    client.close().await.unwrap();
}

#[tokio::test]
async fn character_details_by_name_and_id() {
    let client = client().await;

    let by_name = client
        .character()
        .get_character(Some("Hoshino"), None)
        .await
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(by_name.id, Some(10005));
    assert_eq!(by_name.base.role, Some(Role::Tank));
    assert_eq!(by_name.info.club.as_deref(), Some("Foreclosure Task Force"));
    assert_eq!(by_name.stats.max_hp_level1, Some(2207));
    assert_eq!(by_name.skills.ex.as_ref().unwrap().id, Some(1));

    let by_id = client
        .character()
        .get_character(None, Some(10005))
        .await
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(by_id, by_name);

    client.close().await.unwrap();
}

#[tokio::test]
async fn character_details_jp_by_japanese_name() {
    let client = client().await;

    let result = client
        .character()
        .get_character_jp(Some("セリナ"), None)
        .await
        .unwrap();
    let details = result.value();
    assert_eq!(details.id, Some(13003));
    assert_eq!(details.base.rarity, Some(Rarity::Rare));

    client.close().await.unwrap();
}

#[tokio::test]
async fn unknown_character_is_an_error_result() {
    let client = client().await;

    let result = client
        .character()
        .get_character(Some("Nobody"), None)
        .await
        .unwrap();
    assert!(result.is_error());
    assert_eq!(result.error().status, 404);
    assert_eq!(result.error().message, "Character not found");

    client.close().await.unwrap();
}

#[tokio::test]
async fn dot_names_are_not_read_as_the_list_endpoint() {
    let client = client().await;

    for name in [".", ".."] {
        let result = client
            .character()
            .get_character(Some(name), None)
            .await
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(result.is_error(), "{name}");
        assert_eq!(result.error().status, 404, "{name}");
    }

    client.close().await.unwrap();
}

#[tokio::test]
async fn configured_user_agent_and_body_reach_the_server() {
    let base_url = start_echo_server().await;
    let config = ClientConfig::default()
        .with_base_url(&base_url)
        .with_user_agent("sensei-bot/3.0");
    let transport = ReqwestTransport::new(&config.user_agent).unwrap();

    let request = Route::new(HttpMethod::Post, format!("{}/character/{{}}", config.base_url))
        .generate_route(Some(&PathValue::from("Aru")))
        .unwrap()
        .with_params([("region", "japan")])
        .with_body(json!({"favorite": true}));
    let response = transport.send(&request).await.unwrap();
    assert_eq!(response.status, 200);

    let echoed: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "/character/Aru");
    assert_eq!(echoed["query"], "region=japan");
    assert_eq!(echoed["userAgent"], "sensei-bot/3.0");
    assert_eq!(echoed["contentType"], "application/json");
    assert_eq!(echoed["body"], json!({"favorite": true}));
    assert_eq!(response.header("content-type"), Some("application/json"));

    transport.close().await.unwrap();
}

#[tokio::test]
async fn query_by_role_and_position() {
    let client = client().await;

    let query = CharacterQuery::new().role(Role::Healer).position(Position::Back);
    let result = client.character().get_character_by_query(&query).await.unwrap();
    let characters = result.value();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].base.name.as_deref(), Some("Serina"));

    let query = CharacterQuery::new().school("Trinity");
    let result = client.character().get_character_by_query(&query).await.unwrap();
    assert_eq!(result.value().len(), 2);

    client.close().await.unwrap();
}

#[tokio::test]
async fn raid_schedule() {
    let client = client().await;

    let raids = client.raid().get_raids().await.unwrap().into_value().unwrap();
    assert_eq!(raids.current.len(), 1);
    assert_eq!(raids.current[0].boss_name.as_deref(), Some("Binah"));
    assert_eq!(
        raids.current[0].start_at,
        Some(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap())
    );
    assert!(raids.upcoming[0].end_at.is_none());
    assert!(raids.ended.is_empty());

    let raids_jp = client.raid().get_raids_jp().await.unwrap().into_value().unwrap();
    assert_eq!(raids_jp.current[0].boss_name.as_deref(), Some("ビナー"));

    client.close().await.unwrap();
}

#[tokio::test]
async fn unreachable_server_is_a_status_500_error() {
    // Bind then drop so the port is (almost certainly) closed.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client =
        Client::with_config(ClientConfig::default().with_base_url(format!("http://{addr}"))).unwrap();

    let result = client.raid().get_raids().await.unwrap();
    assert!(result.is_error());
    assert_eq!(result.error().status, 500);
    assert!(!result.error().message.is_empty());

    client.close().await.unwrap();
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let client = client().await;

    let (characters, raids, details) = tokio::join!(
        client.character().get_all_characters(),
        client.raid().get_raids(),
        client.character().get_character(None, Some(20008)),
    );
    assert!(characters.unwrap().is_success());
    assert!(raids.unwrap().is_success());
    assert!(details.unwrap().is_success());

    client.close().await.unwrap();
}

#[tokio::test]
async fn calls_after_close_are_faults() {
    let client = client().await;
    client.close().await.unwrap();

    let err = client.character().get_all_characters().await.unwrap_err();
    assert!(matches!(err, ClientError::Closed));
}
