use axum::{body::Bytes, extract::State};

use crate::api::envelope::{AdminResponse, AdminResult};
use crate::auth;
use crate::database::models::{Enrollment, User};
use crate::database::Database;
use crate::error::AdminError;
use crate::services::snapshot;
use crate::session::SessionStore;

use super::{parse_body, required_str};

/// POST /api/admin/smth - Overwrite an enrollment's activity history with a
/// placeholder 7-day snapshot.
///
/// The body's `token` names the *target user* here; the gate has already
/// read the same field as the admin bearer. The written values are random
/// stand-ins, not aggregated from recorded activity.
pub async fn post(State(sessions): State<SessionStore>, bytes: Bytes) -> AdminResult {
    let body = parse_body(&bytes)?;
    auth::authorize(&body, &sessions).await?;

    let token = required_str(&body, "token")?;
    let subject = required_str(&body, "subject")?;

    let pool = Database::pool().await?;
    let user = User::find_by_token(&pool, token)
        .await?
        .ok_or(AdminError::NotFound(None))?;

    let enrollment = Enrollment::for_user(&pool, user.id)
        .await?
        .into_iter()
        .find(|enrollment| enrollment.subject_codename == subject)
        .ok_or(AdminError::NotFound(None))?;

    let today = chrono::Local::now().date_naive();
    let activity = snapshot::placeholder(today, &mut rand::thread_rng());
    Enrollment::set_activity(&pool, enrollment.id, &activity).await?;

    Ok(AdminResponse::success())
}
