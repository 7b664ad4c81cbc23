#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use camp_signups::models::{Activity, NewActivity};
use camp_signups::repo::ActivityRepo;
use camp_signups::{app, apply_migrations, connect, AppState};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_BODY_LIMIT: usize = 64 * 1024;

/// Router over a fresh in-memory database with the schema applied.
pub async fn build_test_app() -> (Router, SqlitePool) {
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    let router = app(AppState { pool: pool.clone() }, TEST_BODY_LIMIT);
    (router, pool)
}

pub async fn insert_activity(pool: &SqlitePool, name: &str, difficulty: i64) -> Activity {
    let mut conn = pool.acquire().await.unwrap();
    let new = NewActivity::new(name, difficulty).unwrap();
    ActivityRepo::insert(&mut conn, &new).await.unwrap()
}

pub async fn signup_count_for_activity(pool: &SqlitePool, activity_id: i64) -> i64 {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM signups WHERE activity_id = ?")
        .bind(activity_id)
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_signup(app: &Router, camper_id: i64, activity_id: i64, time: i64) -> Response {
    let body = serde_json::json!({
        "camper_id": camper_id,
        "activity_id": activity_id,
        "time": time
    });
    post_json(app, "/signups", body).await
}

pub async fn patch_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn post_raw(app: &Router, uri: &str, raw: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
