use axum::extract::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{Admin, AdminFilter, AdminPatch, NewAdmin};
use crate::error::ApiError;
use crate::middleware::{ApiResult, Envelope};
use crate::pagination::PageRequest;
use crate::services::ServiceError;

use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::params::empty_as_none;
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct ListAdminsQuery {
    #[serde(default, alias = "pageNum", deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, alias = "size", deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub username: Option<String>,
    #[serde(default, alias = "adminType", deserialize_with = "empty_as_none")]
    pub admin_type: Option<i32>,
}

impl ListAdminsQuery {
    fn into_parts(self, state: &AppState) -> (AdminFilter, PageRequest) {
        let page = state.page_request(self.page, self.limit);
        let filter = AdminFilter {
            id: self.id,
            username: self.username,
            admin_type: self.admin_type,
        };
        (filter, page)
    }
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(alias = "oldPwd")]
    pub old_password: String,
    #[serde(alias = "newPwd")]
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub ids: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// GET /api/admins - Paged, template-filtered list of administrators
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListAdminsQuery>,
) -> ApiResult<Vec<Admin>> {
    let (filter, page) = query.into_parts(&state);
    let result = state.admins.query_all(&filter, page).await?;
    Ok(Envelope::page(result))
}

/// POST /api/admins - Add an administrator
pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<NewAdmin>,
) -> ApiResult<Admin> {
    let admin = state.admins.add(draft).await?;
    Ok(Envelope::data(admin))
}

/// GET /api/admins/:id - Look up one administrator
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Admin> {
    match state.admins.query_by_id(id).await? {
        Some(admin) => Ok(Envelope::data(admin)),
        None => Err(ApiError::not_found(format!("Administrator {} not found", id))),
    }
}

/// PATCH /api/admins/:id - Update the fields present in the body
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(patch): ApiJson<AdminPatch>,
) -> ApiResult<Admin> {
    let admin = state.admins.update(id, &patch).await?;
    Ok(Envelope::data(admin))
}

/// PUT /api/admins/:id/password - Replace the password if the old one matches
pub async fn change_password(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<ChangePasswordRequest>,
) -> ApiResult<()> {
    match state.admins.change_password(id, &body.old_password, &body.new_password).await {
        Ok(()) => Ok(Envelope::ok()),
        Err(ServiceError::PasswordMismatch) => Ok(Envelope::fail("Old password is incorrect")),
        Err(e) => Err(e.into()),
    }
}

/// DELETE /api/admins?ids=1,2,3 - Delete the listed administrators
pub async fn delete(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DeleteQuery>,
) -> ApiResult<Value> {
    let removed = state.admins.delete_by_ids(&query.ids).await?;
    Ok(Envelope::data(json!({ "deleted": removed })))
}

/// POST /api/admins/login - Credential lookup
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> ApiResult<Admin> {
    match state.admins.authenticate(&body.username, &body.password).await? {
        Some(admin) => Ok(Envelope::data(admin)),
        None => Ok(Envelope::fail("Invalid username or password")),
    }
}
