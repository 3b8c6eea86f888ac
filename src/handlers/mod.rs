// handlers/mod.rs - HTTP controllers
//
// Each handler binds a typed request struct, maps it explicitly onto service
// inputs, calls exactly one service operation and returns an Envelope.

pub mod admin;
pub mod extract;
pub mod notice;
pub mod params;
pub mod system;

use std::sync::Arc;

use crate::config::PaginationConfig;
use crate::database::models::{Admin, Notice};
use crate::database::store::{AdminStore, RecordStore};
use crate::database::{DatabaseManager, MemoryStore, PgAdminStore, PgNoticeStore};
use crate::pagination::PageRequest;
use crate::services::{AdminService, NoticeService};

/// Shared handler state, assembled once at startup.
#[derive(Clone)]
pub struct AppState {
    pub admins: Arc<AdminService>,
    pub notices: Arc<NoticeService>,
    pub pagination: PaginationConfig,
}

impl AppState {
    pub fn new(
        admin_store: Arc<dyn AdminStore>,
        notice_store: Arc<dyn RecordStore<Notice>>,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            admins: Arc::new(AdminService::new(admin_store)),
            notices: Arc::new(NoticeService::new(notice_store)),
            pagination,
        }
    }

    pub fn postgres(database: &DatabaseManager, pagination: PaginationConfig) -> Self {
        let pool = database.pool().clone();
        Self::new(
            Arc::new(PgAdminStore::new(pool.clone())),
            Arc::new(PgNoticeStore::new(pool)),
            pagination,
        )
    }

    pub fn in_memory(pagination: PaginationConfig) -> Self {
        Self::new(
            Arc::new(MemoryStore::<Admin>::new()),
            Arc::new(MemoryStore::<Notice>::new()),
            pagination,
        )
    }

    /// Apply configured defaults and caps to raw page parameters
    pub fn page_request(&self, page: Option<i64>, size: Option<i64>) -> PageRequest {
        PageRequest::new(
            page,
            size,
            self.pagination.default_page_size,
            self.pagination.max_page_size,
        )
    }
}
