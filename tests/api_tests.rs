//! Integration tests for lichess-rs against a local mock server.
//!
//! These tests exercise the request layer (auth header injection, error
//! mapping) and the response decoder (JSON, NDJSON streams, PGN splitting,
//! timestamp conversion) end to end, without touching the real API.

use std::sync::Once;

use chrono::{TimeZone, Utc};
use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lichess_rs::prelude::*;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn client_for(server: &MockServer, token: Option<&str>) -> LichessClient {
    init_logging();
    let config = ClientConfig::default().with_base_url(server.uri());
    LichessClient::with_config(token.map(String::from), config).expect("client")
}

fn sample_user() -> serde_json::Value {
    json!({
        "id": "thibault",
        "username": "thibault",
        "createdAt": 1290415680000_i64,
        "seenAt": 1522636452014_i64,
        "perfs": {"blitz": {"games": 2340, "rating": 1681, "rd": 45, "prog": -21}}
    })
}

// ============================================================================
// SESSION / REQUEST LAYER
// ============================================================================

#[tokio::test]
async fn test_bearer_header_sent_when_token_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/thibault"))
        .and(header("authorization", "Bearer my-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_user()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("my-token"));
    let user = client.users().get("thibault").await.unwrap();
    assert_eq!(user.id, "thibault");
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/thibault"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_user()))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    client.users().get("thibault").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_404_maps_to_api_error_with_cause() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.users().get("ghost").await.unwrap_err();
    match err {
        Error::Api {
            status,
            reason,
            cause,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
            assert_eq!(cause.as_deref(), Some("Not found"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_json_body_has_no_cause() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/account"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("t"));
    let err = client.account().profile().await.unwrap_err();
    assert!(err.is_server_error());
    match err {
        Error::Api { cause, .. } => assert!(cause.is_none()),
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_error_is_distinct() {
    // Nothing is listening on this port
    let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
    let client = LichessClient::with_config(None, config).unwrap();
    let err = client.users().get("anyone").await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_query_parameters_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/account/kid"))
        .and(query_param("v", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("t"));
    client.account().set_kid_mode(true).await.unwrap();
}

// ============================================================================
// DECODER: SINGLE JSON
// ============================================================================

#[tokio::test]
async fn test_timestamps_decode_to_aware_datetimes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/thibault"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_user()))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let user = client.users().get("thibault").await.unwrap();
    assert_eq!(
        user.created_at.unwrap(),
        Utc.timestamp_millis_opt(1_290_415_680_000).unwrap()
    );
}

#[tokio::test]
async fn test_absent_timestamp_fields_decode_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/fresh"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "fresh", "username": "Fresh"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let user = client.users().get("fresh").await.unwrap();
    assert!(user.created_at.is_none());
    assert!(user.seen_at.is_none());
}

#[tokio::test]
async fn test_malformed_json_surfaces_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.users().get("broken").await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

// ============================================================================
// DECODER: NDJSON STREAMS
// ============================================================================

fn ndjson_body(lines: &[serde_json::Value]) -> String {
    let mut body = String::new();
    for line in lines {
        body.push_str(&line.to_string());
        body.push('\n');
    }
    body
}

fn sample_game(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "rated": true,
        "variant": "standard",
        "speed": "blitz",
        "perf": "blitz",
        "createdAt": 1514505150384_i64,
        "lastMoveAt": 1514505592843_i64,
        "status": "mate",
        "winner": "white",
        "players": {
            "white": {"user": {"id": "alice", "name": "Alice"}, "rating": 2000},
            "black": {"user": {"id": "bob", "name": "Bob"}, "rating": 1990}
        }
    })
}

#[tokio::test]
async fn test_ndjson_yields_one_item_per_non_blank_line() {
    let server = MockServer::start().await;
    let mut body = ndjson_body(&[sample_game("aaa"), sample_game("bbb")]);
    body.push('\n'); // blank line mid-stream contributes no item
    body.push_str(&sample_game("ccc").to_string());

    Mock::given(method("GET"))
        .and(path("/api/games/user/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/x-ndjson"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let stream = client
        .games()
        .export_by_player("alice", Default::default())
        .await
        .unwrap();
    let games: Vec<Game> = stream.map(|g| g.unwrap()).collect().await;

    let ids: Vec<&str> = games.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["aaa", "bbb", "ccc"]);
    assert_eq!(games[0].winner, Some(Color::White));
}

#[tokio::test]
async fn test_ndjson_bad_line_raised_at_iteration_point() {
    let server = MockServer::start().await;
    let body = format!("{}\nnot json\n", sample_game("aaa"));

    Mock::given(method("GET"))
        .and(path("/api/games/user/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/x-ndjson"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let mut stream = client
        .games()
        .export_by_player("alice", Default::default())
        .await
        .unwrap();

    assert_eq!(stream.next().await.unwrap().unwrap().id, "aaa");
    assert!(matches!(stream.next().await, Some(Err(Error::Json(_)))));
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_ndjson_error_status_raised_before_streaming() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tournament/xyz/results"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error": "Too many requests"})))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client
        .tournaments()
        .stream_results("xyz", Some(10))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn test_board_event_stream_decodes_typed_events() {
    let server = MockServer::start().await;
    let body = ndjson_body(&[
        json!({"type": "gameStart", "game": {"id": "abc", "color": "white"}}),
        json!({"type": "somethingFromTheFuture"}),
    ]);

    Mock::given(method("GET"))
        .and(path("/api/stream/event"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/x-ndjson"))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("t"));
    let mut events = client.board().stream_events().await.unwrap();

    match events.next().await.unwrap().unwrap() {
        Event::GameStart { game } => assert_eq!(game.id, "abc"),
        other => panic!("Expected GameStart, got {other:?}"),
    }
    assert!(matches!(
        events.next().await.unwrap().unwrap(),
        Event::Unknown
    ));
    assert!(events.next().await.is_none());
}

// ============================================================================
// DECODER: PGN
// ============================================================================

const MULTI_GAME_PGN: &str = "[Event \"Rated Blitz game\"]\n[White \"alice\"]\n\n1. e4 e5 1-0\n\n\n[Event \"Casual Bullet game\"]\n[White \"bob\"]\n\n1. d4 d5 1/2-1/2\n";

#[tokio::test]
async fn test_single_game_pgn_returned_verbatim() {
    let server = MockServer::start().await;
    let pgn = "[Event \"Rated Blitz game\"]\n\n1. e4 e5 1-0\n";
    Mock::given(method("GET"))
        .and(path("/game/export/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(pgn, "application/x-chess-pgn"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let text = client
        .games()
        .export_pgn("abc123", &Default::default())
        .await
        .unwrap();
    assert_eq!(text, pgn);
}

#[tokio::test]
async fn test_bulk_pgn_splits_on_game_boundaries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/games/export/_ids"))
        .and(body_string("abc,def"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(MULTI_GAME_PGN, "application/x-chess-pgn"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let stream = client
        .games()
        .export_many_pgn(&["abc", "def"], &Default::default())
        .await
        .unwrap();
    let games: Vec<String> = stream.map(|g| g.unwrap()).collect().await;

    assert_eq!(games.len(), 2);
    assert!(games[0].starts_with("[Event \"Rated Blitz game\"]"));
    assert!(games[0].ends_with("1-0"));
    assert!(games[1].starts_with("[Event \"Casual Bullet game\"]"));
}

// ============================================================================
// REQUEST BODY ROUND-TRIP
// ============================================================================

#[tokio::test]
async fn test_challenge_body_round_trips_through_echo() {
    let server = MockServer::start().await;
    let expected_body = json!({
        "rated": true,
        "clock.limit": 300,
        "clock.increment": 3,
        "variant": "standard"
    });

    // Echo the accepted challenge back the way the server would
    Mock::given(method("POST"))
        .and(path("/api/challenge/bob"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ch1",
            "status": "created",
            "rated": true,
            "speed": "blitz",
            "variant": {"key": "standard", "name": "Standard"},
            "timeControl": {"type": "clock", "limit": 300, "increment": 3, "show": "5+3"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("t"));
    let request = ChallengeRequest {
        rated: true,
        clock_limit: Some(300),
        clock_increment: Some(3),
        variant: Some(Variant::Standard),
        ..Default::default()
    };
    let challenge = client.challenges().create("bob", &request).await.unwrap();

    assert_eq!(challenge.id, "ch1");
    match challenge.time_control {
        lichess_rs::models::TimeControl::Clock { limit, increment, .. } => {
            assert_eq!((limit, increment), (request.clock_limit.unwrap(), request.clock_increment.unwrap()));
        }
        other => panic!("Expected clock time control, got {other:?}"),
    }
}

// ============================================================================
// MISC ENDPOINT GLUE
// ============================================================================

#[tokio::test]
async fn test_users_statuses_joins_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/status"))
        .and(query_param("ids", "alice,bob"))
        .and(query_param("withGameIds", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "alice", "name": "Alice", "online": true, "playingId": "xyz"},
            {"id": "bob", "name": "Bob"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let statuses = client.users().statuses(&["alice", "bob"], true).await.unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].playing_id.as_deref(), Some("xyz"));
    assert!(statuses[1].online.is_none());
}

#[tokio::test]
async fn test_account_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/account/email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "me@example.com"})))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("t"));
    assert_eq!(client.account().email().await.unwrap(), "me@example.com");
}

#[tokio::test]
async fn test_ongoing_games_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/account/playing"))
        .and(query_param("nb", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nowPlaying": [{
                "gameId": "abc", "fullId": "abcdefgh", "color": "black",
                "fen": "8/8/8/8/8/8/8/8", "hasMoved": true, "isMyTurn": false,
                "opponent": {"id": "carol", "username": "Carol", "rating": 1500},
                "perf": "blitz", "rated": true, "secondsLeft": 120,
                "speed": "blitz", "variant": {"key": "standard", "name": "Standard"}
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("t"));
    let games = client.games().ongoing(5).await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].game_id, "abc");
    assert_eq!(games[0].color, Color::Black);
}

#[tokio::test]
async fn test_tournament_starts_at_accepts_both_wire_forms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tournament"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "created": [{"id": "a", "fullName": "A", "startsAt": "2022-07-05T12:00:00.000Z"}],
            "started": [{"id": "b", "fullName": "B", "startsAt": 1657022400000_i64}],
            "finished": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let current = client.tournaments().current().await.unwrap();
    assert_eq!(
        current.created[0].starts_at.unwrap(),
        current.started[0].starts_at.unwrap()
    );
}

#[tokio::test]
async fn test_tv_channels_map() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tv/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Blitz": {"user": {"id": "a", "name": "A"}, "rating": 2800, "gameId": "g1"},
            "Bot": {"user": {"id": "b", "name": "B"}, "rating": 3000, "gameId": "g2"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let channels = client.tv().channels().await.unwrap();
    assert_eq!(channels["Bot"].game_id, "g2");
}
