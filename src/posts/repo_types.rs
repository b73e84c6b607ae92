use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Post record in the database. `user_id` is set at creation and never
/// updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub cover_url: Option<String>,
    pub is_public: bool,
    pub rating: Option<i32>,
    pub created_at: OffsetDateTime,
}
