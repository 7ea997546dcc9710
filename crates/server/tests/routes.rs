//! Router integration tests
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Html;
use axum::routing::get;
use serde_json::{Value, json};
use sitelift_core::{Scraper, ScraperConfig};
use sitelift_server::{AppState, MemoryStore, Telemetry, build_router};
use tower::ServiceExt;

const SOURCE_PAGE: &str = r#"<html><head><title>Corner Cafe</title>
    <meta name="description" content="Coffee and pastries."></head>
    <body>
        <h1>Corner Cafe</h1>
        <h2>Menu</h2>
        <li>Espresso</li><li>Croissant</li>
        <a href="https://www.instagram.com/cornercafe/">Instagram</a>
        <a href="mailto:hi@cornercafe.test?subject=Booking">Email</a>
    </body></html>"#;

fn app_with(telemetry: Telemetry) -> Router {
    build_router(AppState::new(Scraper::new(), telemetry), Duration::from_secs(30))
}

fn memory_app() -> Router {
    app_with(Telemetry::new(Arc::new(MemoryStore::new())))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("user-agent", "route-tests")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn serve_source() -> String {
    let router = Router::new().route("/", get(|| async { Html(SOURCE_PAGE) })).route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Html(SOURCE_PAGE)
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_root_message() {
    let response = memory_app().oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"message": "Hello from the sitelift backend!"}));
}

#[tokio::test]
async fn test_health_reports_store() {
    let response = memory_app().oneshot(get_request("/test")).await.unwrap();
    assert_eq!(json_body(response).await, json!({"ok": true, "db": true}));

    let response = app_with(Telemetry::disabled()).oneshot(get_request("/test")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"ok": true, "db": false}));
}

#[tokio::test]
async fn test_visits_are_counted() {
    let app = memory_app();

    let response = app.clone().oneshot(post_json("/api/visit", json!({"path": "/pricing"}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"ok": true}));

    let empty = Request::builder().method("POST").uri("/api/visit").body(Body::empty()).unwrap();
    app.clone().oneshot(empty).await.unwrap();

    let response = app.clone().oneshot(get_request("/api/stats")).await.unwrap();
    assert_eq!(json_body(response).await, json!({"total_visits": 2}));

    let response = app.clone().oneshot(get_request("/api/visits?path=/pricing")).await.unwrap();
    let body = json_body(response).await;
    let visits = body["visits"].as_array().unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0]["fields"]["path"], "/pricing");
    assert_eq!(visits[0]["fields"]["user_agent"], "route-tests");
    assert_eq!(visits[0]["collection"], "visit");

    let response = app.oneshot(get_request("/api/visits?path=/")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["visits"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_malformed_visit_body_still_ok() {
    let app = memory_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/visit")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"ok": true}));

    let response = app.oneshot(get_request("/api/stats")).await.unwrap();
    assert_eq!(json_body(response).await, json!({"total_visits": 1}));
}

#[tokio::test]
async fn test_visit_without_store_degrades() {
    let app = app_with(Telemetry::disabled());

    let response = app.clone().oneshot(post_json("/api/visit", json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"ok": true}));

    let response = app.clone().oneshot(get_request("/api/stats")).await.unwrap();
    assert_eq!(json_body(response).await, json!({"total_visits": 0}));

    let response = app.oneshot(get_request("/api/visits")).await.unwrap();
    assert_eq!(json_body(response).await, json!({"visits": []}));
}

#[tokio::test]
async fn test_import_contacts() {
    let base = serve_source().await;
    let response = memory_app()
        .oneshot(post_json("/api/import-contacts", json!({"url": format!("{base}/")})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "instagram": "https://www.instagram.com/cornercafe/",
            "whatsapp": null,
            "email": "hi@cornercafe.test",
            "x": null
        })
    );
}

#[tokio::test]
async fn test_import_content() {
    let base = serve_source().await;
    let url = format!("{base}/");
    let response = memory_app()
        .oneshot(post_json("/api/import-content", json!({ "url": url })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["source"], url);
    assert_eq!(body["title"], "Corner Cafe");
    assert_eq!(body["description"], "Coffee and pastries.");
    assert_eq!(body["highlights"], json!([{"title": "Corner Cafe", "text": null}, {"title": "Menu", "text": null}]));
    assert_eq!(body["sections"], json!([{"title": "Menu", "subtitle": null, "points": ["Espresso", "Croissant"]}]));
}

#[tokio::test]
async fn test_import_invalid_url_is_bad_request() {
    let response = memory_app()
        .oneshot(post_json("/api/import-contacts", json!({"url": "not a url"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().is_some_and(|d| d.starts_with("Failed to fetch source: ")));
}

#[tokio::test]
async fn test_import_unreachable_source_is_bad_request() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = memory_app()
        .oneshot(post_json("/api/import-content", json!({"url": format!("http://{addr}/")})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().is_some_and(|d| d.starts_with("Failed to fetch source: ")));
}

#[tokio::test]
async fn test_import_fetch_timeout_is_bad_request() {
    let base = serve_source().await;
    let scraper = Scraper::with_config(ScraperConfig::builder().timeout(1).build());
    let app = build_router(AppState::new(scraper, Telemetry::disabled()), Duration::from_secs(30));

    let response = app
        .oneshot(post_json("/api/import-contacts", json!({"url": format!("{base}/slow")})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({"detail": "Failed to fetch source: Request timed out after 1 seconds"})
    );
}

#[tokio::test]
async fn test_import_missing_url_is_bad_request() {
    let response = memory_app()
        .oneshot(post_json("/api/import-contacts", json!({"link": "https://example.com"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().is_some_and(|d| d.starts_with("Invalid request body")));
}

#[tokio::test]
async fn test_request_timeout_layer() {
    let base = serve_source().await;
    let app = build_router(AppState::new(Scraper::new(), Telemetry::disabled()), Duration::from_secs(1));

    let response = app
        .oneshot(post_json("/api/import-content", json!({"url": format!("{base}/slow")})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/visit")
        .header("origin", "https://preview.example")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = memory_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-origin"));
}
