use sqlx::{FromRow, PgPool};

/// Catalog subject. `access` is the admin-controlled availability flag.
#[derive(Debug, Clone, FromRow)]
pub struct Subject {
    pub id: i32,
    pub codename: String,
    pub name: String,
    pub access: i16,
}

impl Subject {
    pub async fn find_by_codename(pool: &PgPool, codename: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, codename, name, access FROM subjects WHERE codename = $1",
        )
        .bind(codename)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new subject, closed by default.
    pub async fn create(pool: &PgPool, codename: &str, name: &str) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO subjects (codename, name, access) VALUES ($1, $2, 0)
             RETURNING id, codename, name, access",
        )
        .bind(codename)
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Update only the access flag; all other columns are untouched.
    pub async fn set_access(pool: &PgPool, id: i32, access: i16) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE subjects SET access = $1 WHERE id = $2")
            .bind(access)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// Authored exercise attached to a subject's curriculum.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: i32,
    pub content: String,
    pub answer: String,
    pub description: String,
    pub user_id: Option<i32>,
}

impl Task {
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, content, answer, description, user_id FROM tasks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
