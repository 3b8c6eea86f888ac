//! Postgres accessors for the `admin` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Admin, AdminFilter, AdminPatch, NewAdmin};
use crate::database::repository::Repository;
use crate::database::store::{AdminStore, RecordStore};
use crate::pagination::PageRequest;

pub struct PgAdminStore {
    pool: PgPool,
}

impl PgAdminStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn repository(&self) -> Repository<Admin> {
        Repository::new(self.pool.clone())
    }
}

#[async_trait]
impl RecordStore<Admin> for PgAdminStore {
    async fn get(&self, id: i32) -> Result<Option<Admin>, DatabaseError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, password, admin_type FROM admin WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn insert(&self, draft: NewAdmin) -> Result<Admin, DatabaseError> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admin (username, password, admin_type)
            VALUES ($1, $2, $3)
            RETURNING id, username, password, admin_type
            "#,
        )
        .bind(&draft.username)
        .bind(&draft.password)
        .bind(draft.admin_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn update_partial(&self, id: i32, patch: &AdminPatch) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE admin
            SET username = COALESCE($2, username),
                password = COALESCE($3, password),
                admin_type = COALESCE($4, admin_type)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.username.as_deref())
        .bind(patch.password.as_deref())
        .bind(patch.admin_type)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update_full(&self, record: &Admin) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE admin SET username = $2, password = $3, admin_type = $4 WHERE id = $1",
        )
        .bind(record.id)
        .bind(&record.username)
        .bind(&record.password)
        .bind(record.admin_type)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DatabaseError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM admin WHERE id = ANY($1)")
            .bind(ids.to_vec())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list(&self, filter: &AdminFilter, page: Option<PageRequest>) -> Result<Vec<Admin>, DatabaseError> {
        self.repository().select_any(filter, page).await
    }

    async fn count(&self, filter: &AdminFilter) -> Result<i64, DatabaseError> {
        self.repository().count(filter).await
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl AdminStore for PgAdminStore {
    async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<Admin>, DatabaseError> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            SELECT id, username, password, admin_type
            FROM admin
            WHERE username = $1 AND password = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }
}
