//! HTTP-level tests for `/signups`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, insert_activity, post_json, post_signup};
use serde_json::json;

#[tokio::test]
async fn end_to_end_camper_signup_flow() {
    let (app, pool) = build_test_app().await;
    insert_activity(&pool, "Archery", 2).await;

    let response = post_json(&app, "/campers", json!({"name": "Alex", "age": 10})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 1, "name": "Alex", "age": 10}));

    let response = post_signup(&app, 1, 1, 9).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": 1,
            "camper_id": 1,
            "activity_id": 1,
            "time": 9,
            "camper": {"id": 1, "name": "Alex", "age": 10},
            "activity": {"id": 1, "name": "Archery", "difficulty": 2}
        })
    );

    let response = get(&app, "/campers/1").await;
    let json = body_json(response).await;
    let signups = json["signups"].as_array().unwrap();
    assert_eq!(signups.len(), 1);
    assert_eq!(signups[0]["time"], 9);
    assert!(signups[0].get("camper").is_none());
}

#[tokio::test]
async fn out_of_range_time_is_rejected() {
    let (app, pool) = build_test_app().await;
    insert_activity(&pool, "Archery", 2).await;
    post_json(&app, "/campers", json!({"name": "Alex", "age": 10})).await;

    for time in [-1, 24] {
        let response = post_signup(&app, 1, 1, time).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"errors": ["validation errors"]}));
    }

    let response = get(&app, "/campers/1").await;
    assert_eq!(body_json(response).await["signups"], json!([]));
}

#[tokio::test]
async fn missing_camper_creates_nothing() {
    let (app, pool) = build_test_app().await;
    insert_activity(&pool, "Archery", 2).await;

    let response = post_signup(&app, 5, 1, 9).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"errors": ["validation errors"]}));

    let response = get(&app, "/campers/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_activity_creates_nothing() {
    let (app, _pool) = build_test_app().await;
    post_json(&app, "/campers", json!({"name": "Alex", "age": 10})).await;

    let response = post_signup(&app, 1, 3, 9).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(&app, "/campers/1").await;
    assert_eq!(body_json(response).await["signups"], json!([]));
}

#[tokio::test]
async fn missing_fields_are_bad_requests() {
    let (app, pool) = build_test_app().await;
    insert_activity(&pool, "Archery", 2).await;
    post_json(&app, "/campers", json!({"name": "Alex", "age": 10})).await;

    let response = post_json(&app, "/signups", json!({"camper_id": 1, "time": 9})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json!({"camper_id": "one", "activity_id": 1, "time": 9});
    let response = post_json(&app, "/signups", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(&app, "/campers/1").await;
    assert_eq!(body_json(response).await["signups"], json!([]));
}
