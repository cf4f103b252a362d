use axum::{body::Bytes, extract::State};

use crate::api::envelope::{AdminResponse, AdminResult};
use crate::auth;
use crate::session::SessionStore;

use super::parse_body;

/// POST /api/admin/login - Authenticate an admin and open a session.
///
/// On success the response body is the bearer token as a bare JSON string,
/// which existing clients store and replay in the `token` field.
pub async fn post(State(sessions): State<SessionStore>, bytes: Bytes) -> AdminResult {
    let body = parse_body(&bytes)?;
    let token = auth::login(&body, &sessions).await?;

    Ok(AdminResponse::payload(token))
}
