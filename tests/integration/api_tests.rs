//! HTTP API tests driven through the router without a socket

use crate::common::{article_html, failing_pipeline, mount_article, test_pipeline};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiki_quiz::config::ServerConfig;
use wiki_quiz::pipeline::QuizPipeline;
use wiki_quiz::server::{build_app, API_PREFIX};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(pipeline: QuizPipeline) -> Router {
    build_app(pipeline, &ServerConfig::default())
}

/// Sends one request and decodes the JSON response body
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn generate_request(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn generate(app: &Router, url: &str) -> Value {
    let (status, body) = send(
        app,
        generate_request("/generate-quiz/", json!({ "url": url }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);
    body
}

#[tokio::test]
async fn test_generate_quiz_response_shape() {
    let mock_server = MockServer::start().await;
    mount_article(
        &mock_server,
        "/wiki/Rust",
        article_html("Rust", "Rust is a general-purpose programming language."),
    )
    .await;

    let app = app(test_pipeline());
    let url = format!("{}/wiki/Rust", mock_server.uri());
    let body = generate(&app, &url).await;

    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["url"], url);
    assert_eq!(body["title"], "Rust");
    assert_eq!(
        body["summary"],
        "Rust is a general-purpose programming language."
    );
    assert_eq!(body["questions"].as_array().unwrap().len(), 5);
    assert_eq!(body["questions"][0]["difficulty"], "easy");
    assert_eq!(body["questions"][0]["options"].as_array().unwrap().len(), 4);
    assert_eq!(
        body["related_topics"],
        json!([
            "Introduction to Rust",
            "Applications of Rust",
            "History of Rust"
        ])
    );
    assert!(body["created_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_generate_quiz_without_url() {
    let app = app(test_pipeline());

    for payload in ["{}", r#"{"url": ""}"#, r#"{"url": null}"#, ""] {
        let (status, body) = send(&app, generate_request("/generate-quiz/", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {:?}", payload);
        assert_eq!(body, json!({ "error": "URL is required" }));
    }
}

#[tokio::test]
async fn test_generate_quiz_malformed_body() {
    let app = app(test_pipeline());
    let (status, body) = send(&app, generate_request("/generate-quiz/", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body: "));
}

#[tokio::test]
async fn test_generate_quiz_upstream_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let app = app(test_pipeline());
    let url = format!("{}/wiki/Missing", mock_server.uri());
    let (status, body) = send(
        &app,
        generate_request("/generate-quiz/", json!({ "url": url }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch Wikipedia page:"));

    let (_, history) = send(&app, get_request("/history/")).await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn test_generate_quiz_store_failure() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server, "/wiki/Rust", article_html("Rust", "Summary.")).await;

    let app = app(failing_pipeline());
    let url = format!("{}/wiki/Rust", mock_server.uri());
    let (status, body) = send(
        &app,
        generate_request("/generate-quiz/", json!({ "url": url }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to save quiz: "));
}

#[tokio::test]
async fn test_history_lists_newest_first_without_questions() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server, "/wiki/Alpha", article_html("Alpha", "A.")).await;
    mount_article(&mock_server, "/wiki/Beta", article_html("Beta", "B.")).await;

    let app = app(test_pipeline());
    let first = generate(&app, &format!("{}/wiki/Alpha", mock_server.uri())).await;
    let second = generate(&app, &format!("{}/wiki/Beta", mock_server.uri())).await;

    let (status, history) = send(&app, get_request("/history/")).await;
    assert_eq!(status, StatusCode::OK);

    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], second["id"]);
    assert_eq!(entries[1]["id"], first["id"]);

    let mut keys: Vec<&str> = entries[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["created_at", "id", "title", "url"]);
}

#[tokio::test]
async fn test_history_detail_matches_generated_quiz() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server, "/wiki/Rust", article_html("Rust", "Summary.")).await;

    let app = app(test_pipeline());
    let generated = generate(&app, &format!("{}/wiki/Rust", mock_server.uri())).await;
    let uri = format!("/history/{}/", generated["id"]);

    let (status, first) = send(&app, get_request(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["id"], generated["id"]);
    assert_eq!(first["url"], generated["url"]);
    assert_eq!(first["title"], generated["title"]);
    assert_eq!(first["questions"], generated["questions"]);
    assert_eq!(first["created_at"], generated["created_at"]);
    assert!(first.get("summary").is_none());

    let (_, second) = send(&app, get_request(&uri)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_history_detail_not_found() {
    let app = app(test_pipeline());

    let (status, body) = send(&app, get_request("/history/999/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Quiz 999 not found" }));

    let (status, _) = send(&app, get_request("/history/abc/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_history_store_failure() {
    let app = app(failing_pipeline());
    let (status, body) = send(&app, get_request("/history/")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to load quiz history: "));
}

#[tokio::test]
async fn test_routes_without_trailing_slash() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server, "/wiki/Rust", article_html("Rust", "Summary.")).await;

    let app = app(test_pipeline());
    let url = format!("{}/wiki/Rust", mock_server.uri());
    let (status, generated) = send(
        &app,
        generate_request("/generate-quiz", json!({ "url": url }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, history) = send(&app, get_request("/history")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, get_request(&format!("/history/{}", generated["id"]))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_routes_under_api_prefix() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server, "/wiki/Rust", article_html("Rust", "Summary.")).await;

    let app = app(test_pipeline());

    let (status, body) = send(
        &app,
        generate_request(&format!("{}/generate-quiz/", API_PREFIX), "{}"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "URL is required" }));

    let url = format!("{}/wiki/Rust", mock_server.uri());
    let (status, generated) = send(
        &app,
        generate_request(
            &format!("{}/generate-quiz/", API_PREFIX),
            json!({ "url": url }).to_string(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, history) = send(&app, get_request(&format!("{}/history/", API_PREFIX))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history[0]["id"], generated["id"]);

    let (status, detail) = send(
        &app,
        get_request(&format!("{}/history/{}/", API_PREFIX, generated["id"])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["title"], "Rust");

    let (status, body) = send(&app, get_request(&format!("{}/history/999/", API_PREFIX))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Quiz 999 not found" }));

    // Both mounts share one store
    let (_, root_history) = send(&app, get_request("/history/")).await;
    assert_eq!(root_history, history);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(test_pipeline()), get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "quizzes": 0 }));

    let (status, body) = send(&app(failing_pipeline()), get_request("/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let app = app(test_pipeline());
    let request = Request::builder()
        .uri("/history/")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_cors_wildcard() {
    let config = ServerConfig {
        allowed_origins: vec!["*".to_string()],
        ..ServerConfig::default()
    };
    let app = build_app(test_pipeline(), &config);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/generate-quiz/")
        .header(header::ORIGIN, "https://quiz.example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
