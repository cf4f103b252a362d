use axum::{body::Bytes, extract::State};

use crate::api::envelope::{AdminResponse, AdminResult};
use crate::auth::{self, password};
use crate::database::models::{Author, User};
use crate::database::Database;
use crate::error::AdminError;
use crate::session::SessionStore;

use super::{parse_body, required_str};

/// POST /api/admin/create-author - Grant a user authoring rights over a set
/// of subject codenames. Not idempotent: one author record per user.
///
/// The target user is resolved by `key` against the bearer token column.
pub async fn post(State(sessions): State<SessionStore>, bytes: Bytes) -> AdminResult {
    let body = parse_body(&bytes)?;
    auth::authorize(&body, &sessions).await?;

    let key = required_str(&body, "key")?;
    let pass = required_str(&body, "pass")?;
    let subjects: Vec<String> = body
        .get("subjects")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .ok_or(AdminError::MissingField(None))?;

    let pool = Database::pool().await?;
    let user = User::find_by_token(&pool, key)
        .await?
        .ok_or(AdminError::NotFound(None))?;

    if Author::find_by_user_id(&pool, user.id).await?.is_some() {
        return Err(AdminError::Conflict);
    }

    let pw_hash = password::hash(pass.to_string())
        .await
        .map_err(|e| AdminError::Internal(e.to_string()))?;

    Author::create(&pool, user.id, &pw_hash, &subjects).await?;

    Ok(AdminResponse::success())
}
