use serde_json::json;
use sqlx::{postgres::PgRow, FromRow, PgPool};

use crate::database::manager::DatabaseError;
use crate::database::query_builder::QueryBuilder;
use crate::database::store::Entity;
use crate::filter::{template_conditions, FilterData};
use crate::pagination::PageRequest;

/// Template-filtered reads shared by the Postgres stores.
pub struct Repository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
{
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_any(&self, filter: &T::Filter, page: Option<PageRequest>) -> Result<Vec<T>, DatabaseError> {
        let filter_data = FilterData {
            where_clause: Some(template_conditions(filter)?),
            order: Some(json!("id asc")),
            limit: page.map(|p| p.limit()),
            offset: page.map(|p| p.offset()),
        };
        QueryBuilder::<T>::new(T::TABLE)?
            .filter(filter_data)?
            .select_all(&self.pool)
            .await
    }

    pub async fn count(&self, filter: &T::Filter) -> Result<i64, DatabaseError> {
        let filter_data = FilterData {
            where_clause: Some(template_conditions(filter)?),
            ..Default::default()
        };
        QueryBuilder::<T>::new(T::TABLE)?
            .filter(filter_data)?
            .count(&self.pool)
            .await
    }
}
