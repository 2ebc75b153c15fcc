#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    routing::post,
};
use serde_json::{Value, json};

/// Request bodies the fake upstream has received.
pub type Seen = Arc<Mutex<Vec<Value>>>;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Fake Ollama answering every `/api/generate` call with `status` and `body`.
pub async fn fake_ollama(status: StatusCode, body: Value) -> (String, Seen) {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route(
            "/api/generate",
            post(
                move |State(seen): State<Seen>, Json(req): Json<Value>| async move {
                    seen.lock().unwrap().push(req);
                    (status, Json(body))
                },
            ),
        )
        .with_state(seen.clone());
    (spawn_upstream(router).await, seen)
}

/// Fake Gemini; records path, api key header and body for every call.
pub async fn fake_gemini(reply: &str) -> (String, Seen) {
    let seen: Seen = Arc::default();
    let body = json!({
        "candidates": [{
            "content": { "parts": [{ "text": reply }], "role": "model" },
            "finishReason": "STOP"
        }]
    });
    let router = Router::new()
        .fallback(
            move |State(seen): State<Seen>,
                  uri: Uri,
                  headers: HeaderMap,
                  Json(req): Json<Value>| async move {
                let key = headers
                    .get("x-goog-api-key")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                seen.lock()
                    .unwrap()
                    .push(json!({ "path": uri.path(), "key": key, "body": req }));
                Json(body)
            },
        )
        .with_state(seen.clone());
    (spawn_upstream(router).await, seen)
}

pub fn prompt_of(seen: &Seen) -> String {
    let seen = seen.lock().unwrap();
    seen.last().unwrap()["prompt"].as_str().unwrap().to_string()
}
