pub mod password;
pub mod token;

use serde_json::Value;

use crate::config;
use crate::database::{models::Admin, Database};
use crate::error::AdminError;
use crate::session::SessionStore;

/// Authorization gate for the admin surface.
///
/// Every gated request claims `{token, code}` in its JSON body. The token
/// must name an Admin row; that admin is accepted when either the session
/// store already holds its token (logged in earlier) or the request's code
/// equals the configured shared secret. Any missing field rejects, and all
/// rejections look identical on the wire.
pub async fn authorize(body: &Value, sessions: &SessionStore) -> Result<Admin, AdminError> {
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .ok_or(AdminError::Unauthorized)?;
    let code = body
        .get("code")
        .and_then(Value::as_str)
        .ok_or(AdminError::Unauthorized)?;

    let pool = Database::pool().await?;
    let admin = Admin::find_by_token(&pool, token).await?;

    let logged_in = match &admin {
        Some(admin) => sessions.contains(&admin.token).await,
        None => false,
    };

    decide(admin, logged_in, code, &config::config().security.admin_key)
        .ok_or(AdminError::Unauthorized)
}

/// Session-or-secret decision, separated from request I/O.
///
/// An unknown token short-circuits: neither an active session nor a correct
/// shared secret can rescue it. An unset shared secret never matches.
fn decide(admin: Option<Admin>, logged_in: bool, code: &str, admin_key: &str) -> Option<Admin> {
    let admin = admin?;
    if logged_in {
        return Some(admin);
    }
    if !admin_key.is_empty() && code == admin_key {
        return Some(admin);
    }
    None
}

/// Admin login: email plus password plus the shared secret, all required.
/// A missing admin row fails closed before any credential check. On success
/// the admin's bearer token is recorded in the session store and returned.
pub async fn login(body: &Value, sessions: &SessionStore) -> Result<String, AdminError> {
    let email = body
        .get("email")
        .and_then(Value::as_str)
        .ok_or(AdminError::MissingField(None))?;
    let pass = body
        .get("pass")
        .and_then(Value::as_str)
        .ok_or(AdminError::MissingField(None))?;
    let key = body
        .get("key")
        .and_then(Value::as_str)
        .ok_or(AdminError::MissingField(None))?;

    let pool = Database::pool().await?;
    let admin = Admin::find_by_email(&pool, email)
        .await?
        .ok_or(AdminError::Unauthorized)?;

    if !password::verify(pass, &admin.pw_hash) {
        return Err(AdminError::Unauthorized);
    }

    let admin_key = &config::config().security.admin_key;
    if admin_key.is_empty() || key != admin_key {
        return Err(AdminError::Unauthorized);
    }

    sessions.insert(admin.token.clone()).await;
    Ok(admin.token)
}
