mod common;

use axum_test::TestServer;
use serde_json::json;

use common::InMemoryViolationRepository;

#[tokio::test]
async fn test_submit_violation_success() {
    let state = common::create_test_state(InMemoryViolationRepository::new());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/violations")
        .json(&json!({
            "house_number": "12",
            "street": "Elm St",
            "date": "2018-01-05",
            "not_out": true,
            "details": "cart blocked by car"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["date"], "2018-01-05");
    assert_eq!(json["house_number"], "12");
    assert_eq!(json["street"], "Elm St");
    assert_eq!(json["overflow"], false);
    assert_eq!(json["not_out"], true);
    assert_eq!(json["not_at_curb"], false);
    assert_eq!(json["details"], "cart blocked by car");
}

#[tokio::test]
async fn test_submit_violation_defaults() {
    let state = common::create_test_state(InMemoryViolationRepository::new());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/violations")
        .json(&json!({
            "house_number": "9",
            "street": "Oak Ave",
            "details": ""
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["date"], common::today().to_string());
    assert_eq!(json["overflow"], false);
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_submit_violation_missing_street() {
    let state = common::create_test_state(InMemoryViolationRepository::new());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/violations")
        .json(&json!({
            "house_number": "12",
            "street": ""
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_submit_violation_blank_house_number() {
    let state = common::create_test_state(InMemoryViolationRepository::new());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/violations")
        .json(&json!({
            "house_number": "   ",
            "street": "Elm St"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["street"], "Elm St");
}

#[tokio::test]
async fn test_worst_offenders_ranking() {
    let repo = InMemoryViolationRepository::new();
    let state = common::create_test_state(repo);

    for (house, street) in [
        ("12", "Elm St"),
        ("9", "Oak Ave"),
        ("12", "Elm St "),
        ("12", "Elm St"),
        ("9", "Oak Ave"),
        ("1", "Ash Ct"),
    ] {
        state
            .violation_service
            .submit(common::new_violation(house, street, "2018-01-02"))
            .await
            .unwrap();
    }

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/violations/worst?limit=2").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["address"], "12 Elm St");
    assert_eq!(items[0]["offences"], 3);
    assert_eq!(items[1]["address"], "9 Oak Ave");
    assert_eq!(items[1]["offences"], 2);
}

#[tokio::test]
async fn test_worst_offenders_default_limit() {
    let state = common::create_test_state(InMemoryViolationRepository::new());

    for n in 0..12 {
        state
            .violation_service
            .submit(common::new_violation(&n.to_string(), "Elm St", "2018-01-02"))
            .await
            .unwrap();
    }

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/violations/worst").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_worst_offenders_limit_out_of_range() {
    let state = common::create_test_state(InMemoryViolationRepository::new());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    server
        .get("/api/violations/worst?limit=0")
        .await
        .assert_status_bad_request();

    server
        .get("/api/violations/worst?limit=101")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_worst_offenders_limit_not_a_number() {
    let state = common::create_test_state(InMemoryViolationRepository::new());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/violations/worst?limit=abc").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid query parameters");
}

#[tokio::test]
async fn test_worst_offenders_database_down() {
    let state = common::create_test_state(InMemoryViolationRepository::offline());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/violations/worst").await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}
