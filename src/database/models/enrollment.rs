use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::collections::BTreeMap;

/// Per-enrollment activity history: calendar date to score.
pub type ActivityMap = BTreeMap<NaiveDate, i32>;

/// The enrollment's running challenge. A fresh enrollment carries the open
/// sentinel (id 0, result 0, not closed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: i32,
    pub result: i32,
    pub closed: bool,
}

/// Per-user, per-subject progress record.
#[derive(Debug, Clone, FromRow)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub subject_codename: String,
    pub passed_lectures: Json<Vec<String>>,
    pub passed_tests: Json<Vec<String>>,
    pub test_points: i32,
    pub tasks: i32,
    pub experience: i32,
    pub activity: Json<ActivityMap>,
    pub challenge: Json<Challenge>,
}

const ENROLLMENT_COLUMNS: &str = "id, user_id, subject_codename, passed_lectures, passed_tests, \
                                  test_points, tasks, experience, activity, challenge";

impl Enrollment {
    pub async fn for_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {ENROLLMENT_COLUMNS} FROM user_subjects WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Enroll a user in a subject with zeroed counters, empty pass lists and
    /// an open challenge.
    pub async fn enroll(pool: &PgPool, user_id: i32, codename: &str) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "INSERT INTO user_subjects
                 (user_id, subject_codename, passed_lectures, passed_tests,
                  test_points, tasks, experience, activity, challenge)
             VALUES ($1, $2, $3, $4, 0, 0, 0, $5, $6)
             RETURNING {ENROLLMENT_COLUMNS}"
        ))
        .bind(user_id)
        .bind(codename)
        .bind(Json(Vec::<String>::new()))
        .bind(Json(Vec::<String>::new()))
        .bind(Json(ActivityMap::new()))
        .bind(Json(Challenge::default()))
        .fetch_one(pool)
        .await
    }

    /// Overwrite the activity history; no other column is touched.
    pub async fn set_activity(
        pool: &PgPool,
        id: i32,
        activity: &ActivityMap,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE user_subjects SET activity = $1 WHERE id = $2")
            .bind(Json(activity))
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_challenge_is_open_sentinel() {
        let challenge = Challenge::default();
        assert_eq!(challenge.id, 0);
        assert_eq!(challenge.result, 0);
        assert!(!challenge.closed);
    }

    #[test]
    fn activity_map_serializes_with_date_keys() {
        let mut map = ActivityMap::new();
        map.insert(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(), 42);

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "2026-08-05": 42 }));
    }
}
