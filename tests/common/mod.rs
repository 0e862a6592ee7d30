// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::ServiceExt;

use metatag_server::{
    fetch::{Fetcher, USER_AGENT},
    handlers,
    state::AppState,
};

/// Short enough that the `/slow` fixture always trips it.
pub const TEST_FETCH_TIMEOUT: Duration = Duration::from_millis(500);

pub const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>  Acme Widgets - Handmade widgets for every home  </title>
    <meta name="description" content="Acme builds sturdy handmade widgets.">
    <meta property="og:title" content="Acme Widgets">
    <meta property="og:description" content="Handmade widgets.">
    <meta property="og:image" content="https://acme.test/og.png">
    <meta property="og:type" content="website">
    <meta property="og:url" content="https://acme.test/">
    <meta property="og:site_name" content="Acme">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:site" content="@acme">
    <script type="application/ld+json">{"@type": "Organization", "name": "Acme"}</script>
</head>
<body></body>
</html>"#;

pub const TITLE_ONLY_PAGE: &str = "<html><head><title>A great product</title></head></html>";

pub fn test_fetcher() -> Fetcher {
    Fetcher::new(TEST_FETCH_TIMEOUT, USER_AGENT).expect("Failed to build test fetcher")
}

/// Build the full application router with a short-timeout fetcher.
pub fn create_test_app() -> Router {
    let state = AppState {
        fetcher: test_fetcher(),
    };
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/metadata", post(handlers::metadata::get_metadata))
        .route("/api/analyze", post(handlers::metadata::analyze))
        .route("/api/score", post(handlers::metadata::score_metadata))
        .with_state(state)
}

// ── Fixture site ─────────────────────────────────────────────────────────────

async fn echo_headers(headers: HeaderMap) -> Html<String> {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    Html(format!(
        "<html><head><title>{}</title><meta name=\"description\" content=\"{}\"></head></html>",
        header_value(header::USER_AGENT),
        header_value(header::ACCEPT),
    ))
}

async fn slow_page() -> Html<&'static str> {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Html(FULL_PAGE)
}

fn fixture_router() -> Router {
    Router::new()
        .route("/page", get(|| async { Html(FULL_PAGE) }))
        .route("/title-only", get(|| async { Html(TITLE_ONLY_PAGE) }))
        .route("/redirect", get(|| async { Redirect::temporary("/page") }))
        .route("/headers", get(echo_headers))
        .route("/slow", get(slow_page))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Html("<h1>Not found</h1>")) }),
        )
        .route(
            "/forbidden",
            get(|| async { (StatusCode::FORBIDDEN, Html("<h1>Forbidden</h1>")) }),
        )
        .route(
            "/down",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, Html("<h1>Down</h1>")) }),
        )
        .route(
            "/teapot",
            get(|| async { (StatusCode::IM_A_TEAPOT, Html("<h1>Teapot</h1>")) }),
        )
        .route(
            "/json",
            get(|| async { Json(serde_json::json!({ "hello": "world" })) }),
        )
        .route(
            "/plain",
            get(|| async {
                "<html><head><title>Served as text</title></head></html>".into_response()
            }),
        )
        .route("/blank", get(|| async { Html("   \n\t  ") }))
}

/// Serve the fixture site on an ephemeral local port and return its base URL.
pub async fn spawn_fixture_site() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture site");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, fixture_router()).await.unwrap();
    });
    format!("http://{addr}")
}

/// An address nothing is listening on.
pub async fn closed_port_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Accepts connections, reads the request, then hangs up without responding.
pub async fn spawn_hangup_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind hangup server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket.shutdown().await;
        }
    });
    addr
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, req).await
}

pub async fn get_request(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
