use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

/// Profile projection, one-to-one with a user.
#[derive(Debug, Clone, FromRow)]
pub struct UserPage {
    pub id: i32,
    pub user_id: i32,
    pub photo: String,
    pub about: String,
    pub city: Option<String>,
    pub experience: i32,
    pub lectures: i32,
    pub tasks: i32,
    pub tests: i32,
    pub last_actions: Json<Vec<String>>,
    pub active_achievements: Json<Vec<String>>,
    pub achievements: Json<Vec<String>>,
    pub active_background: Option<String>,
}

const PAGE_COLUMNS: &str = "id, user_id, photo, about, city, experience, lectures, tasks, tests, \
                            last_actions, active_achievements, achievements, active_background";

impl UserPage {
    pub async fn find_by_user_id(pool: &PgPool, user_id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {PAGE_COLUMNS} FROM user_pages WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Create the empty page a fresh user starts with.
    pub async fn create_default(pool: &PgPool, user_id: i32) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "INSERT INTO user_pages
                 (user_id, photo, about, city, experience, lectures, tasks, tests,
                  last_actions, active_achievements, achievements, active_background)
             VALUES ($1, '', '', NULL, 0, 0, 0, 0, $2, $3, $4, NULL)
             RETURNING {PAGE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(Json(Vec::<String>::new()))
        .bind(Json(Vec::<String>::new()))
        .bind(Json(Vec::<String>::new()))
        .fetch_one(pool)
        .await
    }
}
