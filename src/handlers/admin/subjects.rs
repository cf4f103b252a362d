use axum::{body::Bytes, extract::State};
use serde_json::Value;

use crate::api::envelope::{AdminResponse, AdminResult};
use crate::auth;
use crate::database::models::Subject;
use crate::database::Database;
use crate::error::AdminError;
use crate::session::SessionStore;

use super::{parse_body, required_str};

/// POST /api/admin/define-subject - Set a subject's access flag.
///
/// The one endpoint whose failure messages distinguish the missing-field,
/// not-found and not-admin cases on the wire.
pub async fn define(State(sessions): State<SessionStore>, bytes: Bytes) -> AdminResult {
    let body = parse_body(&bytes)?;
    auth::authorize(&body, &sessions).await.map_err(|e| match e {
        AdminError::Store(_) => e,
        _ => AdminError::NotAdmin,
    })?;

    let codename = body.get("codename").and_then(Value::as_str);
    let define = body
        .get("define")
        .and_then(Value::as_i64)
        .and_then(|v| i16::try_from(v).ok());
    let (Some(codename), Some(define)) = (codename, define) else {
        return Err(AdminError::MissingField(Some("codename and define")));
    };

    let pool = Database::pool().await?;
    let subject = Subject::find_by_codename(&pool, codename)
        .await?
        .ok_or(AdminError::NotFound(Some("subject does not exist")))?;

    Subject::set_access(&pool, subject.id, define).await?;

    Ok(AdminResponse::success())
}

/// POST /api/admin/create-subject - Insert a subject if the codename is
/// unused. Not idempotent: a second call with the same codename fails.
pub async fn create(State(sessions): State<SessionStore>, bytes: Bytes) -> AdminResult {
    let body = parse_body(&bytes)?;
    auth::authorize(&body, &sessions).await?;

    let codename = required_str(&body, "codename")?;
    let name = required_str(&body, "name")?;

    let pool = Database::pool().await?;
    if Subject::find_by_codename(&pool, codename).await?.is_some() {
        return Err(AdminError::Conflict);
    }

    // Concurrent creates race past the check above; the unique constraint on
    // codename resolves the loser into the same error envelope.
    Subject::create(&pool, codename, name).await?;

    Ok(AdminResponse::success())
}
