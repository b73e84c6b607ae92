use crate::posts::repo_types::Post;
use sqlx::PgPool;
use uuid::Uuid;

impl Post {
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, title, content, cover_url, is_public, rating, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(post)
    }

    /// Posts owned by `user_id`, oldest first.
    pub async fn list_by_owner(db: &PgPool, user_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, user_id, title, content, cover_url, is_public, rating, created_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        title: Option<&str>,
        content: &str,
        cover_url: Option<&str>,
        is_public: bool,
        rating: Option<i32>,
    ) -> Result<Post, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (user_id, title, content, cover_url, is_public, rating)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, title, content, cover_url, is_public, rating, created_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(content)
        .bind(cover_url)
        .bind(is_public)
        .bind(rating)
        .fetch_one(db)
        .await?;
        Ok(post)
    }

    /// Rewrites the mutable columns. The owner column is deliberately not
    /// part of the statement.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: Option<&str>,
        content: &str,
        cover_url: Option<&str>,
        is_public: bool,
        rating: Option<i32>,
    ) -> Result<Post, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $2, content = $3, cover_url = $4, is_public = $5, rating = $6
            WHERE id = $1
            RETURNING id, user_id, title, content, cover_url, is_public, rating, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .bind(cover_url)
        .bind(is_public)
        .bind(rating)
        .fetch_one(db)
        .await?;
        Ok(post)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
