//! HTTP surface. Runs with `CommitOnOk`: every request gets its own
//! transaction against a private in-memory database per test.
mod support;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use trumps_backend::db::txn_policy::{set_txn_policy, TxnPolicy};
use trumps_backend::middleware::{RequestTrace, TraceSpan};
use trumps_backend::routes;

use support::test_state::memory_state;

#[ctor::ctor]
fn init() {
    backend_test_support::logging::init();
    set_txn_policy(TxnPolicy::CommitOnOk);
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(web::Data::new($state))
                .configure(routes::configure),
        )
        .await
    };
}

macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr) => {
        test::call_service(
            &$app,
            test::TestRequest::post().uri($uri).set_json($body).to_request(),
        )
        .await
    };
}

#[actix_web::test]
async fn health_reports_db_and_migrations() {
    let app = app!(memory_state().await);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20250901_000001_init");
}

#[actix_web::test]
async fn bad_game_id_is_a_problem_document() {
    let app = app!(memory_state().await);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/games/abc/info").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert_eq!(content_type, "application/problem+json");

    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_GAME_ID");
    assert_eq!(body["trace_id"], trace_header.as_str());
}

#[actix_web::test]
async fn missing_game_is_not_found() {
    let app = app!(memory_state().await);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/games/404/info").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "GAME_NOT_FOUND");
    assert!(body.get("events").is_none(), "only rejected moves carry events");
}

#[actix_web::test]
async fn create_bid_and_play_first_round() {
    let app = app!(memory_state().await);

    let mut player_ids = Vec::new();
    for name in ["north", "south"] {
        let resp = post_json!(
            app,
            "/api/users",
            json!({"username": name, "email": format!("{name}@example.test")})
        );
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["elo"], 1000);
        player_ids.push(body["id"].as_i64().unwrap());
    }

    let resp = post_json!(
        app,
        "/api/games",
        json!({"player_ids": player_ids, "rng_seed": 7})
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let game_id = body["game"]["game_id"].as_i64().unwrap();
    let round_id = body["game"]["first_round_id"].as_i64().unwrap();
    assert_eq!(body["events"][0], json!({"event": "game_start", "data": {"id": game_id}}));
    assert_eq!(body["events"][1]["event"], "full_game_card_info");
    assert_eq!(body["events"][1]["data"]["round_id"], round_id);

    // One card each in the opening round, so 2 is out of range.
    let resp = post_json!(
        app,
        &format!("/api/rounds/{round_id}/bids"),
        json!({"user_id": player_ids[0], "bid": 2})
    );
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_BID");
    assert_eq!(body["events"][0]["event"], "error");
    assert_eq!(body["events"][0]["data"]["message"], body["detail"]);

    for user_id in &player_ids {
        let resp = post_json!(
            app,
            &format!("/api/rounds/{round_id}/bids"),
            json!({"user_id": user_id, "bid": 0})
        );
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["dealing"]["bid"], 0);
        assert_eq!(
            body["events"][0],
            json!({"event": "bid", "data": {"user_id": user_id, "bid": 0}})
        );
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/games/{game_id}/info"))
            .to_request(),
    )
    .await;
    let info: Value = test::read_body_json(resp).await;
    assert_eq!(info["event"], "full_game_card_info");
    let users = info["data"]["users"].as_array().unwrap().clone();
    assert_eq!(users.len(), 2);

    // Whoever is not the opener is turned away; the opener then leads.
    let mut outcomes = Vec::new();
    let mut rejected = 0;
    for _ in 0..2 {
        for user in &users {
            let user_id = user["id"].as_i64().unwrap();
            let card_id = user["cards"][0]["id"].as_i64().unwrap();
            if outcomes.iter().any(|(uid, _)| *uid == user_id) {
                continue;
            }
            let resp = post_json!(
                app,
                &format!("/api/rounds/{round_id}/plays"),
                json!({"user_id": user_id, "card_id": card_id})
            );
            if resp.status() == StatusCode::UNPROCESSABLE_ENTITY {
                let body: Value = test::read_body_json(resp).await;
                assert_eq!(body["code"], "OUT_OF_TURN");
                assert_eq!(
                    body["events"],
                    json!([{"event": "error", "data": {"message": body["detail"]}}])
                );
                rejected += 1;
                continue;
            }
            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            outcomes.push((user_id, body));
        }
    }

    assert!(rejected <= 1);
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].1["outcome"]["outcome"], "played");
    let last = &outcomes[1].1;
    assert_eq!(last["outcome"]["outcome"], "round_advanced");
    assert_eq!(last["outcome"]["scored_round_id"], round_id);
    let next_round = last["outcome"]["next_round_id"].as_i64().unwrap();
    assert_eq!(last["events"][0]["event"], "full_game_card_info");
    assert_eq!(last["events"][0]["data"]["round_id"], next_round);
}
