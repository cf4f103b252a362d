use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

/// Authoring privilege: links a user to the subject codenames they may
/// author, gated by a dedicated password.
#[derive(Debug, Clone, FromRow)]
pub struct Author {
    pub id: i32,
    pub user_id: i32,
    pub pw_hash: String,
    pub subjects: Json<Vec<String>>,
}

impl Author {
    pub async fn find_by_user_id(pool: &PgPool, user_id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, pw_hash, subjects FROM authors WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &PgPool,
        user_id: i32,
        pw_hash: &str,
        subjects: &[String],
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO authors (user_id, pw_hash, subjects) VALUES ($1, $2, $3)
             RETURNING id, user_id, pw_hash, subjects",
        )
        .bind(user_id)
        .bind(pw_hash)
        .bind(Json(subjects.to_vec()))
        .fetch_one(pool)
        .await
    }
}
