use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::store::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Notice {
    pub id: i32,
    pub topic: String,
    pub content: String,
    pub author: Option<String>,
    pub create_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewNotice {
    pub topic: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    /// Defaults to the insertion time
    #[serde(default)]
    pub create_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NoticeFilter {
    pub id: Option<i32>,
    pub topic: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoticePatch {
    pub topic: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl Entity for Notice {
    type Draft = NewNotice;
    type Filter = NoticeFilter;
    type Patch = NoticePatch;

    const TABLE: &'static str = "notice";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewNotice) -> Self {
        Self {
            id,
            topic: draft.topic,
            content: draft.content,
            author: draft.author,
            create_date: draft.create_date.unwrap_or_else(Utc::now),
        }
    }

    fn apply_patch(&mut self, patch: &NoticePatch) {
        if let Some(topic) = &patch.topic { self.topic = topic.clone(); }
        if let Some(content) = &patch.content { self.content = content.clone(); }
        if let Some(author) = &patch.author { self.author = Some(author.clone()); }
    }
}
