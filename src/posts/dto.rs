use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::posts::repo_types::Post;

const EXCERPT_LEN: usize = 115;

/// Body shared by create and update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub content: String,
    pub title: Option<String>,
    pub cover_url: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    pub rating: Option<i32>,
}

/// Compact listing entry: cover plus a teaser of the content.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListItem {
    pub id: Uuid,
    pub cover_url: Option<String>,
    pub excerpt: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub cover_url: Option<String>,
    pub is_public: bool,
    pub rating: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Post> for PostListItem {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            cover_url: p.cover_url,
            excerpt: excerpt(&p.content),
            created_at: p.created_at,
        }
    }
}

impl From<Post> for PostDetails {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            title: p.title,
            content: p.content,
            cover_url: p.cover_url,
            is_public: p.is_public,
            rating: p.rating,
            created_at: p.created_at,
        }
    }
}

pub(crate) fn excerpt(content: &str) -> String {
    let mut teaser: String = content.chars().take(EXCERPT_LEN).collect();
    teaser.push_str("...");
    teaser
}
