mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn health_and_root_respond() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK, "expected 200 OK, got {}", res.status());
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok", "unexpected health body: {}", body);

    let res = client.get(format!("{}/", server.base_url)).send().await?;
    let body = res.json::<Value>().await?;
    assert!(body["data"]["version"].is_string(), "missing version: {}", body);
    Ok(())
}

#[tokio::test]
async fn password_change_scenario_over_http() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{}/api/admins", server.base_url))
        .json(&json!({ "username": "a", "password": "p1" }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let k = created["data"]["id"].as_i64().unwrap_or_default();
    let uri = format!("{}/api/admins/{}/password", server.base_url, k);

    let first = client
        .put(&uri)
        .json(&json!({ "old_password": "p1", "new_password": "p2" }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(first["status"], "ok", "{}", first);

    let second = client
        .put(&uri)
        .json(&json!({ "old_password": "p1", "new_password": "p3" }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(second["status"], "fail", "{}", second);

    let fetched = client
        .get(format!("{}/api/admins/{}", server.base_url, k))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(fetched["data"]["password"], "p2");
    Ok(())
}
