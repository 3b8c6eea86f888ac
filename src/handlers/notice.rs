use axum::extract::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{NewNotice, Notice, NoticeFilter};
use crate::error::ApiError;
use crate::middleware::{ApiResult, Envelope};
use crate::pagination::PageRequest;

use super::admin::DeleteQuery;
use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::params::empty_as_none;
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct ListNoticesQuery {
    #[serde(default, alias = "pageNum", deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, alias = "size", deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub author: Option<String>,
}

impl ListNoticesQuery {
    fn into_parts(self, state: &AppState) -> (NoticeFilter, PageRequest) {
        let page = state.page_request(self.page, self.limit);
        let filter = NoticeFilter {
            id: self.id,
            topic: self.topic,
            author: self.author,
        };
        (filter, page)
    }
}

/// GET /api/notices - Paged, template-filtered list of notices
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListNoticesQuery>,
) -> ApiResult<Vec<Notice>> {
    let (filter, page) = query.into_parts(&state);
    let result = state.notices.query_all(&filter, page).await?;
    Ok(Envelope::page(result))
}

/// POST /api/notices - Add a notice
pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<NewNotice>,
) -> ApiResult<Notice> {
    let notice = state.notices.add(draft).await?;
    Ok(Envelope::data(notice))
}

/// GET /api/notices/:id - Look up one notice
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Notice> {
    match state.notices.query_by_id(id).await? {
        Some(notice) => Ok(Envelope::data(notice)),
        None => Err(ApiError::not_found(format!("Notice {} not found", id))),
    }
}

/// DELETE /api/notices?ids=1,2,3 - Delete the listed notices
pub async fn delete(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DeleteQuery>,
) -> ApiResult<Value> {
    let removed = state.notices.delete_by_ids(&query.ids).await?;
    Ok(Envelope::data(json!({ "deleted": removed })))
}
