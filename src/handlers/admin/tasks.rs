use axum::{body::Bytes, extract::State};
use serde::Serialize;
use serde_json::Value;

use crate::api::envelope::{AdminResponse, AdminResult};
use crate::auth;
use crate::database::models::Task;
use crate::database::Database;
use crate::error::AdminError;
use crate::session::SessionStore;

use super::parse_body;

#[derive(Debug, Serialize)]
struct TaskDetail {
    id: i32,
    content: String,
    answer: String,
    description: String,
}

/// POST /api/admin/get_task - Task detail, answer included.
pub async fn post(State(sessions): State<SessionStore>, bytes: Bytes) -> AdminResult {
    let body = parse_body(&bytes)?;
    auth::authorize(&body, &sessions).await?;

    let task_id = body
        .get("task_id")
        .and_then(Value::as_i64)
        .and_then(|id| i32::try_from(id).ok())
        .ok_or(AdminError::MissingField(Some("task_id")))?;

    let pool = Database::pool().await?;
    let task = Task::find_by_id(&pool, task_id)
        .await?
        .ok_or(AdminError::NotFound(Some("task not found")))?;

    Ok(AdminResponse::payload(TaskDetail {
        id: task.id,
        content: task.content,
        answer: task.answer,
        description: task.description,
    }))
}
