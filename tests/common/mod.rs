#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use backoffice_api::{app, config::AppConfig, AppState};

/// Router backed by fresh in-memory stores
pub fn memory_app() -> Router {
    let config = AppConfig::development();
    app(AppState::in_memory(config.pagination.clone()), &config.security)
}

/// Drive one request through the router and decode the JSON body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body)?).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok((status, json))
}

pub async fn get(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    send(app, "POST", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    send(app, "DELETE", uri, None).await
}

pub fn status_of(body: &Value) -> &str {
    body.get("status").and_then(Value::as_str).unwrap_or("")
}

pub fn data_len(body: &Value) -> usize {
    body.get("data").and_then(Value::as_array).map(Vec::len).unwrap_or(0)
}

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

/// Serve a memory-backed router on a free local port for the rest of the test.
pub async fn spawn_server() -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;

    let router = memory_app();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestServer {
        port,
        base_url: format!("http://127.0.0.1:{}", port),
    })
}
