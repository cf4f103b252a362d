use axum::{body::Bytes, extract::State};
use serde::Serialize;

use crate::api::envelope::{AdminResponse, AdminResult};
use crate::auth;
use crate::database::models::{TestUser, User};
use crate::database::Database;
use crate::session::SessionStore;

use super::parse_body;

#[derive(Debug, Serialize)]
struct UserRow {
    id: i32,
    name: String,
    email: Option<String>,
    token: Option<String>,
    role: i16,
}

/// POST /api/admin/get_all - Every registered user.
pub async fn all(State(sessions): State<SessionStore>, bytes: Bytes) -> AdminResult {
    let body = parse_body(&bytes)?;
    auth::authorize(&body, &sessions).await?;

    let pool = Database::pool().await?;
    let rows: Vec<UserRow> = User::list_all(&pool)
        .await?
        .into_iter()
        .map(|user| UserRow {
            id: user.id,
            name: user.name,
            email: user.email,
            token: user.token,
            role: user.role.as_i16(),
        })
        .collect();

    Ok(AdminResponse::payload(rows))
}

#[derive(Debug, Serialize)]
struct TestUserRow {
    id: i32,
    email: String,
    key: String,
}

/// POST /api/admin/get_all_improved_email - Every invited test account.
pub async fn improved(State(sessions): State<SessionStore>, bytes: Bytes) -> AdminResult {
    let body = parse_body(&bytes)?;
    auth::authorize(&body, &sessions).await?;

    let pool = Database::pool().await?;
    let rows: Vec<TestUserRow> = TestUser::list_all(&pool)
        .await?
        .into_iter()
        .map(|test_user| TestUserRow {
            id: test_user.id,
            email: test_user.email,
            key: test_user.key,
        })
        .collect();

    Ok(AdminResponse::payload(rows))
}
