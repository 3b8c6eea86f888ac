use std::sync::Arc;

use tracing::{info, warn};

use crate::database::models::{Admin, AdminFilter, AdminPatch, NewAdmin};
use crate::database::store::AdminStore;
use crate::pagination::{paginate, Page, PageRequest};

use super::{parse_ids, ServiceError};

pub struct AdminService {
    store: Arc<dyn AdminStore>,
}

impl AdminService {
    pub fn new(store: Arc<dyn AdminStore>) -> Self {
        Self { store }
    }

    /// Template-filtered page of administrators plus the total match count
    pub async fn query_all(&self, filter: &AdminFilter, page: PageRequest) -> Result<Page<Admin>, ServiceError> {
        let result = paginate(
            page,
            self.store.count(filter),
            self.store.list(filter, Some(page)),
        )
        .await?;
        Ok(result)
    }

    pub async fn add(&self, draft: NewAdmin) -> Result<Admin, ServiceError> {
        let admin = self.store.insert(draft).await?;
        info!(id = admin.id, "administrator added");
        Ok(admin)
    }

    pub async fn query_by_id(&self, id: i32) -> Result<Option<Admin>, ServiceError> {
        Ok(self.store.get(id).await?)
    }

    /// Selective profile update
    pub async fn update(&self, id: i32, patch: &AdminPatch) -> Result<Admin, ServiceError> {
        if self.store.update_partial(id, patch).await? == 0 {
            return Err(ServiceError::NotFound(id));
        }
        self.store.get(id).await?.ok_or(ServiceError::NotFound(id))
    }

    /// Replace the password when `old_password` equals the stored one.
    ///
    /// The comparison is exact and plaintext. The read and the write are two
    /// separate statements, so a concurrent change in between is overwritten.
    pub async fn change_password(&self, id: i32, old_password: &str, new_password: &str) -> Result<(), ServiceError> {
        let mut admin = self.store.get(id).await?.ok_or(ServiceError::NotFound(id))?;

        if admin.password != old_password {
            warn!(id, "password change rejected: old password mismatch");
            return Err(ServiceError::PasswordMismatch);
        }

        admin.password = new_password.to_string();
        self.store.update_full(&admin).await?;
        info!(id, "administrator password changed");
        Ok(())
    }

    /// Delete every listed key that exists; returns how many rows went away.
    pub async fn delete_by_ids(&self, ids_csv: &str) -> Result<u64, ServiceError> {
        let ids = parse_ids(ids_csv)?;
        let removed = self.store.delete_by_ids(&ids).await?;
        info!(requested = ids.len(), removed, "administrators deleted");
        Ok(removed)
    }

    /// Look up an administrator by exact username and password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<Admin>, ServiceError> {
        Ok(self.store.find_by_credentials(username, password).await?)
    }

    /// Round-trip to the backing store
    pub async fn health_check(&self) -> Result<(), ServiceError> {
        Ok(self.store.health_check().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;

    fn service() -> AdminService {
        AdminService::new(Arc::new(MemoryStore::<Admin>::new()))
    }

    fn draft(username: &str, password: &str) -> NewAdmin {
        NewAdmin { username: username.into(), password: password.into(), admin_type: Some(1) }
    }

    #[tokio::test]
    async fn add_then_lookup_round_trips() {
        let svc = service();
        let added = svc.add(draft("a", "p1")).await.unwrap();
        assert_eq!(svc.query_by_id(added.id).await.unwrap(), Some(added));
    }

    #[tokio::test]
    async fn stale_old_password_is_rejected() {
        let svc = service();
        let k = svc.add(draft("a", "p1")).await.unwrap().id;

        svc.change_password(k, "p1", "p2").await.unwrap();
        let err = svc.change_password(k, "p1", "p3").await.unwrap_err();
        assert!(matches!(err, ServiceError::PasswordMismatch));

        let stored = svc.query_by_id(k).await.unwrap().unwrap();
        assert_eq!(stored.password, "p2");
    }

    #[tokio::test]
    async fn change_password_keeps_other_fields() {
        let svc = service();
        let before = svc.add(draft("keeper", "old")).await.unwrap();
        svc.change_password(before.id, "old", "new").await.unwrap();

        let after = svc.query_by_id(before.id).await.unwrap().unwrap();
        assert_eq!(after, Admin { password: "new".into(), ..before });
    }

    #[tokio::test]
    async fn change_password_on_missing_key() {
        let svc = service();
        assert!(matches!(
            svc.change_password(77, "x", "y").await,
            Err(ServiceError::NotFound(77))
        ));
    }

    #[tokio::test]
    async fn update_applies_only_set_fields() {
        let svc = service();
        let a = svc.add(draft("a", "p")).await.unwrap();
        let patch = AdminPatch { admin_type: Some(0), ..Default::default() };
        let updated = svc.update(a.id, &patch).await.unwrap();
        assert_eq!(updated.username, "a");
        assert_eq!(updated.admin_type, Some(0));

        assert!(matches!(svc.update(999, &patch).await, Err(ServiceError::NotFound(999))));
    }

    #[tokio::test]
    async fn delete_by_ids_skips_missing_keys() {
        let svc = service();
        for name in ["a", "b", "c", "d"] {
            svc.add(draft(name, "p")).await.unwrap();
        }
        assert_eq!(svc.delete_by_ids("1,2,3,40").await.unwrap(), 3);
        let left = svc.query_all(&AdminFilter::default(), PageRequest::default()).await.unwrap();
        assert_eq!(left.total, 1);
        assert_eq!(left.items[0].username, "d");
    }

    #[tokio::test]
    async fn malformed_id_list_deletes_nothing() {
        let svc = service();
        svc.add(draft("a", "p")).await.unwrap();
        assert!(matches!(svc.delete_by_ids("1,x").await, Err(ServiceError::InvalidIds(_))));
        assert!(svc.query_by_id(1).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn query_all_pages_with_true_total() {
        let svc = service();
        for i in 0..7 {
            svc.add(draft(&format!("u{}", i), "p")).await.unwrap();
        }
        let page = svc
            .query_all(&AdminFilter::default(), PageRequest { page: 2, size: 3 })
            .await
            .unwrap();
        assert_eq!(page.total, 7);
        assert_eq!(page.items.iter().map(|a| a.id).collect::<Vec<_>>(), vec![4, 5, 6]);

        let beyond = svc
            .query_all(&AdminFilter::default(), PageRequest { page: 10, size: 3 })
            .await
            .unwrap();
        assert_eq!(beyond.total, 7);
        assert!(beyond.items.is_empty());
    }

    #[tokio::test]
    async fn authenticate_requires_exact_match() {
        let svc = service();
        svc.add(draft("root", "secret")).await.unwrap();
        assert!(svc.authenticate("root", "secret").await.unwrap().is_some());
        assert!(svc.authenticate("root", "secret ").await.unwrap().is_none());
    }
}
