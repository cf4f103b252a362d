use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::auth::{password, token};
use crate::config;

/// Platform role, stored as a smallint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
pub enum Role {
    User = 0,
    Author = 1,
    Admin = 2,
}

impl Role {
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub email: Option<String>,
    pub name: String,
    pub vk_id: Option<String>,
    pub google_id: Option<String>,
    pub token: Option<String>,
    pub pw_hash: Option<String>,
    pub profile_done: i16,
    pub role: Role,
}

/// The one credential a user is created with. An external id or email also
/// establishes the bearer token, derived from the id, the configured secret
/// and the creation timestamp; a bare password does not.
#[derive(Debug, Clone)]
pub enum Credential {
    Password(String),
    VkId(String),
    GoogleId(String),
    Email(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CreateUserError {
    #[error("password hashing failed: {0}")]
    Password(#[from] password::PasswordError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

const USER_COLUMNS: &str = "id, email, name, vk_id, google_id, token, pw_hash, profile_done, role";

impl User {
    pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE token = $1"
        ))
        .bind(token)
        .fetch_optional(pool)
        .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(pool)
            .await
    }

    /// Create a user with exactly one credential path.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        role: Role,
        credential: Credential,
    ) -> Result<Self, CreateUserError> {
        let secret = &config::config().security.token_secret;
        let now = chrono::Utc::now().timestamp();

        let (email, vk_id, google_id, bearer, pw_hash) = match credential {
            Credential::Password(plain) => {
                let hash = password::hash(plain).await?;
                (None, None, None, None, Some(hash))
            }
            Credential::VkId(id) => {
                let bearer = token::derive(&id, secret, now);
                (None, Some(id), None, Some(bearer), None)
            }
            Credential::GoogleId(id) => {
                let bearer = token::derive(&id, secret, now);
                (None, None, Some(id), Some(bearer), None)
            }
            Credential::Email(email) => {
                let bearer = token::derive(&email, secret, now);
                (Some(email), None, None, Some(bearer), None)
            }
        };

        let user = sqlx::query_as::<_, Self>(&format!(
            "INSERT INTO users (email, name, vk_id, google_id, token, pw_hash, profile_done, role)
             VALUES ($1, $2, $3, $4, $5, $6, 0, $7)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .bind(name)
        .bind(vk_id)
        .bind(google_id)
        .bind(bearer)
        .bind(pw_hash)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_smallint_values() {
        assert_eq!(Role::User.as_i16(), 0);
        assert_eq!(Role::Author.as_i16(), 1);
        assert_eq!(Role::Admin.as_i16(), 2);
    }
}
