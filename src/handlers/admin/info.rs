use axum::{body::Bytes, extract::State};

use crate::api::envelope::{AdminResponse, AdminResult};
use crate::auth;
use crate::session::SessionStore;

use super::parse_body;

/// POST /api/admin/info - Liveness check for the authorization gate.
pub async fn post(State(sessions): State<SessionStore>, bytes: Bytes) -> AdminResult {
    let body = parse_body(&bytes)?;
    auth::authorize(&body, &sessions).await?;

    Ok(AdminResponse::success())
}
