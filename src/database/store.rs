//! Record store contract.
//!
//! Services depend on these traits rather than on a concrete database, so the
//! Postgres stores and the in-memory store are interchangeable at startup.

use async_trait::async_trait;
use serde::Serialize;

use super::manager::DatabaseError;
use super::models::Admin;
use crate::pagination::PageRequest;

/// A persisted record with a numeric key and its companion payload types.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// Insert payload, everything but the key
    type Draft: Send + Sync + 'static;
    /// Listing template
    type Filter: Serialize + Default + Send + Sync + 'static;
    /// Selective update payload
    type Patch: Send + Sync + 'static;

    const TABLE: &'static str;

    fn id(&self) -> i32;
    fn from_draft(id: i32, draft: Self::Draft) -> Self;
    fn apply_patch(&mut self, patch: &Self::Patch);
}

#[async_trait]
pub trait RecordStore<T: Entity>: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<T>, DatabaseError>;

    /// Insert and return the stored record with its assigned key.
    async fn insert(&self, draft: T::Draft) -> Result<T, DatabaseError>;

    /// Rows affected (0 when the key is unknown).
    async fn update_partial(&self, id: i32, patch: &T::Patch) -> Result<u64, DatabaseError>;

    /// Overwrite every non-key column. Rows affected.
    async fn update_full(&self, record: &T) -> Result<u64, DatabaseError>;

    /// Unknown keys are skipped. Rows affected.
    async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DatabaseError>;

    /// Template match in key order, optionally windowed.
    async fn list(&self, filter: &T::Filter, page: Option<PageRequest>) -> Result<Vec<T>, DatabaseError>;

    async fn count(&self, filter: &T::Filter) -> Result<i64, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[async_trait]
pub trait AdminStore: RecordStore<Admin> {
    /// Exact username and plaintext password match.
    async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<Admin>, DatabaseError>;
}
