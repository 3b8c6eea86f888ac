mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{data_len, delete, get, memory_app, post, send, status_of};

async fn add_admin(app: &axum::Router, username: &str, password: &str) -> Result<i64> {
    let (status, body) = post(app, "/api/admins", json!({ "username": username, "password": password, "admin_type": 1 })).await?;
    assert_eq!(status, StatusCode::OK, "add failed: {}", body);
    assert_eq!(status_of(&body), "ok");
    Ok(body["data"]["id"].as_i64().unwrap_or_default())
}

#[tokio::test]
async fn list_uses_default_page_of_fifteen() -> Result<()> {
    let app = memory_app();
    for i in 0..20 {
        add_admin(&app, &format!("user{}", i), "pw").await?;
    }

    let (status, body) = get(&app, "/api/admins").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(status_of(&body), "ok");
    assert_eq!(body["total"], 20);
    assert_eq!(data_len(&body), 15);

    let (_, body) = get(&app, "/api/admins?page=2").await?;
    assert_eq!(body["total"], 20);
    assert_eq!(data_len(&body), 5);
    assert_eq!(body["data"][0]["username"], "user15");

    Ok(())
}

#[tokio::test]
async fn list_accepts_legacy_page_names() -> Result<()> {
    let app = memory_app();
    for i in 0..12 {
        add_admin(&app, &format!("user{}", i), "pw").await?;
    }

    let (_, body) = get(&app, "/api/admins?pageNum=2&limit=10").await?;
    assert_eq!(body["total"], 12);
    assert_eq!(data_len(&body), 2);
    Ok(())
}

#[tokio::test]
async fn page_past_the_end_is_empty_with_true_total() -> Result<()> {
    let app = memory_app();
    for i in 0..3 {
        add_admin(&app, &format!("user{}", i), "pw").await?;
    }

    let (status, body) = get(&app, "/api/admins?page=9&limit=15").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(status_of(&body), "ok");
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"], json!([]));
    Ok(())
}

#[tokio::test]
async fn blank_filter_fields_match_everything() -> Result<()> {
    let app = memory_app();
    add_admin(&app, "alice", "pw").await?;
    add_admin(&app, "bob", "pw").await?;

    let (status, body) = get(&app, "/api/admins?username=&admin_type=&id=").await?;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["total"], 2);

    let (_, body) = get(&app, "/api/admins?username=bob").await?;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["username"], "bob");
    Ok(())
}

#[tokio::test]
async fn add_then_lookup_round_trips() -> Result<()> {
    let app = memory_app();
    let (_, created) = post(&app, "/api/admins", json!({ "username": "a", "password": "p1", "admin_type": 0 })).await?;
    let id = created["data"]["id"].as_i64().unwrap_or_default();

    let (status, fetched) = get(&app, &format!("/api/admins/{}", id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);
    Ok(())
}

#[tokio::test]
async fn lookup_of_unknown_key_is_not_found() -> Result<()> {
    let app = memory_app();
    let (status, body) = get(&app, "/api/admins/404").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(status_of(&body), "fail");
    assert!(body.get("data").is_none());
    Ok(())
}

#[tokio::test]
async fn change_password_requires_current_password() -> Result<()> {
    let app = memory_app();
    let k = add_admin(&app, "a", "p1").await?;
    let uri = format!("/api/admins/{}/password", k);

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "old_password": "p1", "new_password": "p2" }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(status_of(&body), "ok");

    // Stale old password: in-band failure, no mutation
    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "oldPwd": "p1", "newPwd": "p3" }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(status_of(&body), "fail");
    assert!(body["message"].as_str().unwrap_or("").contains("password"));

    let (_, fetched) = get(&app, &format!("/api/admins/{}", k)).await?;
    assert_eq!(fetched["data"]["password"], "p2");
    assert_eq!(fetched["data"]["username"], "a");
    assert_eq!(fetched["data"]["admin_type"], 1);
    Ok(())
}

#[tokio::test]
async fn change_password_for_unknown_key_is_not_found() -> Result<()> {
    let app = memory_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/api/admins/77/password",
        Some(json!({ "old_password": "x", "new_password": "y" })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(status_of(&body), "fail");
    Ok(())
}

#[tokio::test]
async fn patch_updates_only_given_fields() -> Result<()> {
    let app = memory_app();
    let k = add_admin(&app, "carol", "pw").await?;

    let (status, body) = send(&app, "PATCH", &format!("/api/admins/{}", k), Some(json!({ "admin_type": 0 }))).await?;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["admin_type"], 0);
    assert_eq!(body["data"]["username"], "carol");
    assert_eq!(body["data"]["password"], "pw");
    Ok(())
}

#[tokio::test]
async fn delete_removes_existing_and_skips_unknown_keys() -> Result<()> {
    let app = memory_app();
    for name in ["a", "b", "c", "d"] {
        add_admin(&app, name, "pw").await?;
    }

    let (status, body) = delete(&app, "/api/admins?ids=1,2,3,99").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(status_of(&body), "ok");
    assert_eq!(body["data"]["deleted"], 3);

    let (_, body) = get(&app, "/api/admins").await?;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["username"], "d");

    // Repeating the delete is harmless
    let (status, body) = delete(&app, "/api/admins?ids=1,2,3").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted"], 0);
    Ok(())
}

#[tokio::test]
async fn malformed_id_list_is_rejected_before_deleting() -> Result<()> {
    let app = memory_app();
    add_admin(&app, "a", "pw").await?;

    let (status, body) = delete(&app, "/api/admins?ids=1,abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(status_of(&body), "fail");

    let (_, body) = get(&app, "/api/admins").await?;
    assert_eq!(body["total"], 1);
    Ok(())
}

#[tokio::test]
async fn login_matches_exact_credentials() -> Result<()> {
    let app = memory_app();
    add_admin(&app, "root", "secret").await?;

    let (status, body) = post(&app, "/api/admins/login", json!({ "username": "root", "password": "secret" })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(status_of(&body), "ok");
    assert_eq!(body["data"]["username"], "root");

    let (status, body) = post(&app, "/api/admins/login", json!({ "username": "root", "password": "Secret" })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(status_of(&body), "fail");
    assert!(body.get("data").is_none());
    Ok(())
}

#[tokio::test]
async fn filter_values_are_compared_verbatim() -> Result<()> {
    let app = memory_app();
    add_admin(&app, "bob", "pw").await?;

    let (_, body) = get(&app, "/api/admins?username=%20bob").await?;
    assert_eq!(status_of(&body), "ok");
    assert_eq!(body["total"], 0);
    Ok(())
}

#[tokio::test]
async fn malformed_path_id_is_a_fail_envelope() -> Result<()> {
    let app = memory_app();
    let (status, body) = get(&app, "/api/admins/abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(status_of(&body), "fail");
    assert_eq!(body["code"], "BAD_REQUEST");
    Ok(())
}

#[tokio::test]
async fn malformed_page_number_is_a_fail_envelope() -> Result<()> {
    let app = memory_app();
    let (status, body) = get(&app, "/api/admins?page=abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(status_of(&body), "fail");
    Ok(())
}

#[tokio::test]
async fn delete_without_ids_is_a_fail_envelope() -> Result<()> {
    let app = memory_app();
    add_admin(&app, "a", "pw").await?;

    let (status, body) = delete(&app, "/api/admins").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(status_of(&body), "fail");
    assert!(body["message"].as_str().unwrap_or("").contains("ids"));

    let (_, body) = get(&app, "/api/admins").await?;
    assert_eq!(body["total"], 1);
    Ok(())
}

#[tokio::test]
async fn body_missing_fields_is_a_fail_envelope() -> Result<()> {
    let app = memory_app();
    let (status, body) = post(&app, "/api/admins", json!({ "username": "x" })).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(status_of(&body), "fail");
    assert!(body["message"].as_str().unwrap_or("").contains("password"));

    let (status, body) = send(&app, "PUT", "/api/admins/1/password", Some(json!({ "oldPwd": "p1" }))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(status_of(&body), "fail");
    Ok(())
}
