use crate::auth::repo_types::User;
use sqlx::PgPool;
use uuid::Uuid;

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, login, name, avatar_url, course_name, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, login, name, avatar_url, course_name, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn list(db: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, login, name, avatar_url, course_name, password_hash, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(users)
    }

    /// Create a new user with hashed password. Uniqueness of email and login
    /// is enforced by the database; violations surface as `sqlx` unique
    /// violations for the caller to map.
    pub async fn create(
        db: &PgPool,
        email: &str,
        login: &str,
        name: &str,
        avatar_url: &str,
        course_name: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, login, name, avatar_url, course_name, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, login, name, avatar_url, course_name, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(login)
        .bind(name)
        .bind(avatar_url)
        .bind(course_name)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
