//! In-process record store.
//!
//! Rows live in a key-ordered map behind an async lock; keys are assigned
//! sequentially from 1 and never reused. Listing applies the same template
//! semantics as the SQL path by comparing serialized rows.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::Admin;
use crate::database::store::{AdminStore, Entity, RecordStore};
use crate::filter::{template_conditions, template_matches};
use crate::pagination::PageRequest;

struct MemoryTable<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

pub struct MemoryStore<T> {
    table: RwLock<MemoryTable<T>>,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MemoryTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    async fn matching(&self, filter: &T::Filter) -> Result<Vec<T>, DatabaseError> {
        let conditions = template_conditions(filter)?;
        let table = self.table.read().await;
        let mut out = Vec::new();
        for row in table.rows.values() {
            if Self::row_matches(row, &conditions)? {
                out.push(row.clone());
            }
        }
        Ok(out)
    }

    fn row_matches(row: &T, conditions: &Map<String, Value>) -> Result<bool, DatabaseError> {
        if conditions.is_empty() {
            return Ok(true);
        }
        let value = serde_json::to_value(row).map_err(|e| DatabaseError::QueryError(e.to_string()))?;
        Ok(template_matches(&value, conditions))
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> RecordStore<T> for MemoryStore<T> {
    async fn get(&self, id: i32) -> Result<Option<T>, DatabaseError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: T::Draft) -> Result<T, DatabaseError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;
        let record = T::from_draft(id, draft);
        table.rows.insert(id, record.clone());
        tracing::debug!(table = T::TABLE, id, "inserted");
        Ok(record)
    }

    async fn update_partial(&self, id: i32, patch: &T::Patch) -> Result<u64, DatabaseError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.apply_patch(patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_full(&self, record: &T) -> Result<u64, DatabaseError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&record.id()) {
            Some(row) => {
                *row = record.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DatabaseError> {
        let mut table = self.table.write().await;
        let removed = ids.iter().filter(|id| table.rows.remove(*id).is_some()).count();
        Ok(removed as u64)
    }

    async fn list(&self, filter: &T::Filter, page: Option<PageRequest>) -> Result<Vec<T>, DatabaseError> {
        let rows = self.matching(filter).await?;
        Ok(match page {
            Some(page) => page.slice(&rows),
            None => rows,
        })
    }

    async fn count(&self, filter: &T::Filter) -> Result<i64, DatabaseError> {
        let rows = self.matching(filter).await?;
        Ok(rows.len() as i64)
    }
}

#[async_trait]
impl AdminStore for MemoryStore<Admin> {
    async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<Admin>, DatabaseError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|a| a.username == username && a.password == password)
            .cloned())
    }
}
