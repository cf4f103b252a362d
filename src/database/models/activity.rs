use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

/// Per-user, per-date activity counters, appended as users work through
/// lectures and tasks.
#[derive(Debug, Clone, FromRow)]
pub struct UserActivity {
    pub id: i32,
    pub user_id: i32,
    pub date: NaiveDate,
    pub lectures: i32,
    pub tasks: i32,
}

impl UserActivity {
    pub async fn for_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, user_id, date, lectures, tasks FROM user_activity
             WHERE user_id = $1 ORDER BY date",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Add to a day's counters, creating the row on first activity.
    pub async fn bump(
        pool: &PgPool,
        user_id: i32,
        date: NaiveDate,
        lectures: i32,
        tasks: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_activity (user_id, date, lectures, tasks)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id, date)
             DO UPDATE SET lectures = user_activity.lectures + $3,
                           tasks = user_activity.tasks + $4",
        )
        .bind(user_id)
        .bind(date)
        .bind(lectures)
        .bind(tasks)
        .execute(pool)
        .await?;
        Ok(())
    }
}
