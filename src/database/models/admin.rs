use sqlx::{FromRow, PgPool};

/// Credential holder for the admin surface. `token` is the static bearer
/// value the authorization gate matches requests against.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: i32,
    pub email: String,
    pub pw_hash: String,
    pub token: String,
}

impl Admin {
    pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT id, email, pw_hash, token FROM admins WHERE token = $1")
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT id, email, pw_hash, token FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
