//! Postgres accessors for the `notice` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewNotice, Notice, NoticeFilter, NoticePatch};
use crate::database::repository::Repository;
use crate::database::store::RecordStore;
use crate::pagination::PageRequest;

pub struct PgNoticeStore {
    pool: PgPool,
}

impl PgNoticeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Notice> for PgNoticeStore {
    async fn get(&self, id: i32) -> Result<Option<Notice>, DatabaseError> {
        let notice = sqlx::query_as::<_, Notice>(
            "SELECT id, topic, content, author, create_date FROM notice WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notice)
    }

    async fn insert(&self, draft: NewNotice) -> Result<Notice, DatabaseError> {
        let notice = sqlx::query_as::<_, Notice>(
            r#"
            INSERT INTO notice (topic, content, author, create_date)
            VALUES ($1, $2, $3, COALESCE($4, now()))
            RETURNING id, topic, content, author, create_date
            "#,
        )
        .bind(&draft.topic)
        .bind(&draft.content)
        .bind(draft.author.as_deref())
        .bind(draft.create_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(notice)
    }

    async fn update_partial(&self, id: i32, patch: &NoticePatch) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE notice
            SET topic = COALESCE($2, topic),
                content = COALESCE($3, content),
                author = COALESCE($4, author)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.topic.as_deref())
        .bind(patch.content.as_deref())
        .bind(patch.author.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update_full(&self, record: &Notice) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE notice SET topic = $2, content = $3, author = $4, create_date = $5 WHERE id = $1",
        )
        .bind(record.id)
        .bind(&record.topic)
        .bind(&record.content)
        .bind(record.author.as_deref())
        .bind(record.create_date)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DatabaseError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM notice WHERE id = ANY($1)")
            .bind(ids.to_vec())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list(&self, filter: &NoticeFilter, page: Option<PageRequest>) -> Result<Vec<Notice>, DatabaseError> {
        Repository::<Notice>::new(self.pool.clone()).select_any(filter, page).await
    }

    async fn count(&self, filter: &NoticeFilter) -> Result<i64, DatabaseError> {
        Repository::<Notice>::new(self.pool.clone()).count(filter).await
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
