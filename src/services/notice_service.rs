use std::sync::Arc;

use tracing::info;

use crate::database::models::{NewNotice, Notice, NoticeFilter};
use crate::database::store::RecordStore;
use crate::pagination::{paginate, Page, PageRequest};

use super::{parse_ids, ServiceError};

pub struct NoticeService {
    store: Arc<dyn RecordStore<Notice>>,
}

impl NoticeService {
    pub fn new(store: Arc<dyn RecordStore<Notice>>) -> Self {
        Self { store }
    }

    pub async fn query_all(&self, filter: &NoticeFilter, page: PageRequest) -> Result<Page<Notice>, ServiceError> {
        let result = paginate(
            page,
            self.store.count(filter),
            self.store.list(filter, Some(page)),
        )
        .await?;
        Ok(result)
    }

    pub async fn add(&self, draft: NewNotice) -> Result<Notice, ServiceError> {
        let notice = self.store.insert(draft).await?;
        info!(id = notice.id, "notice added");
        Ok(notice)
    }

    pub async fn query_by_id(&self, id: i32) -> Result<Option<Notice>, ServiceError> {
        Ok(self.store.get(id).await?)
    }

    pub async fn delete_by_ids(&self, ids_csv: &str) -> Result<u64, ServiceError> {
        let ids = parse_ids(ids_csv)?;
        let removed = self.store.delete_by_ids(&ids).await?;
        info!(requested = ids.len(), removed, "notices deleted");
        Ok(removed)
    }

    pub async fn health_check(&self) -> Result<(), ServiceError> {
        Ok(self.store.health_check().await?)
    }
}
