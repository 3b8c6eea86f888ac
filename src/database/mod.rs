pub mod manager;
pub mod query_builder;
pub mod repository;
pub mod models;
pub mod store;
pub mod admin_store;
pub mod notice_store;
pub mod memory;

pub use manager::{DatabaseManager, DatabaseError};
pub use store::{AdminStore, Entity, RecordStore};
pub use admin_store::PgAdminStore;
pub use notice_store::PgNoticeStore;
pub use memory::MemoryStore;
