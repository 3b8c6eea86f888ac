use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::store::Entity;

/// Row of the `admin` table.
///
/// `password` is stored and compared as plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    pub password: String,
    /// 0 = super administrator, 1 = ordinary administrator
    pub admin_type: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAdmin {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub admin_type: Option<i32>,
}

/// Template for listing; unset fields match everything.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminFilter {
    pub id: Option<i32>,
    pub username: Option<String>,
    pub admin_type: Option<i32>,
}

/// Selective update; only `Some` fields are written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub admin_type: Option<i32>,
}

impl Entity for Admin {
    type Draft = NewAdmin;
    type Filter = AdminFilter;
    type Patch = AdminPatch;

    const TABLE: &'static str = "admin";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewAdmin) -> Self {
        Self {
            id,
            username: draft.username,
            password: draft.password,
            admin_type: draft.admin_type,
        }
    }

    fn apply_patch(&mut self, patch: &AdminPatch) {
        if let Some(username) = &patch.username { self.username = username.clone(); }
        if let Some(password) = &patch.password { self.password = password.clone(); }
        if let Some(admin_type) = patch.admin_type { self.admin_type = Some(admin_type); }
    }
}
