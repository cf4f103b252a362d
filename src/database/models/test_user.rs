use sqlx::{FromRow, PgPool};

use crate::auth::token;

/// Invite-only test account: an email plus a derived short access key.
/// Key uniqueness is probabilistic; only the column constraint enforces it.
#[derive(Debug, Clone, FromRow)]
pub struct TestUser {
    pub id: i32,
    pub email: String,
    pub key: String,
}

impl TestUser {
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT id, email, key FROM test_users ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn create(pool: &PgPool, email: &str) -> Result<Self, sqlx::Error> {
        let key = token::invitation_key(email, chrono::Utc::now().timestamp());

        sqlx::query_as::<_, Self>(
            "INSERT INTO test_users (email, key) VALUES ($1, $2) RETURNING id, email, key",
        )
        .bind(email)
        .bind(key)
        .fetch_one(pool)
        .await
    }
}
