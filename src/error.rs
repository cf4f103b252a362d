// Admin surface error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::database::DatabaseError;

/// Rejection on the admin surface, with an explicit kind per failure class.
///
/// Wire contract: the HTTP status is always 200 and the body's `result`
/// field carries the outcome. Authorization failures serialize identically
/// to generic failures so a caller cannot probe which check rejected it.
#[derive(Debug)]
pub enum AdminError {
    /// Request body was missing or not valid JSON.
    Malformed,
    /// A required field was absent. The label, when present, is exposed on
    /// the wire ("Error: need task_id"); otherwise the envelope is generic.
    MissingField(Option<&'static str>),
    /// Gate rejection, indistinguishable from the generic failure envelope.
    Unauthorized,
    /// Gate rejection on the one endpoint that names it on the wire.
    NotAdmin,
    /// Referenced entity does not exist. The label, when present, is the
    /// exposed message tail ("Error: task not found"); otherwise generic.
    NotFound(Option<&'static str>),
    /// Duplicate subject/author. Reported through the generic envelope.
    Conflict,
    /// Store-level fault. Logged server-side, degraded to the generic
    /// envelope on the wire.
    Store(DatabaseError),
    /// Any other internal fault (hashing, serialization). Logged, generic
    /// on the wire.
    Internal(String),
}

impl AdminError {
    /// The `result` value this rejection puts on the wire.
    pub fn wire_message(&self) -> String {
        match self {
            AdminError::MissingField(Some(field)) => format!("Error: need {}", field),
            AdminError::NotAdmin => "Error: you are not admin".to_string(),
            AdminError::NotFound(Some(message)) => format!("Error: {}", message),
            AdminError::Malformed
            | AdminError::MissingField(None)
            | AdminError::Unauthorized
            | AdminError::NotFound(None)
            | AdminError::Conflict
            | AdminError::Store(_)
            | AdminError::Internal(_) => "Error".to_string(),
        }
    }
}

impl From<DatabaseError> for AdminError {
    fn from(err: DatabaseError) -> Self {
        AdminError::Store(err)
    }
}

impl From<sqlx::Error> for AdminError {
    fn from(err: sqlx::Error) -> Self {
        AdminError::Store(DatabaseError::Sqlx(err))
    }
}

impl std::fmt::Display for AdminError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_message())
    }
}

impl std::error::Error for AdminError {}

impl IntoResponse for AdminError {
    fn into_response(self) -> axum::response::Response {
        // Don't expose internal errors to clients
        match &self {
            AdminError::Store(err) => tracing::error!("store error on admin surface: {}", err),
            AdminError::Internal(msg) => tracing::error!("internal error on admin surface: {}", msg),
            _ => {}
        }
        (StatusCode::OK, Json(json!({ "result": self.wire_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_rejections_are_indistinguishable() {
        assert_eq!(AdminError::Unauthorized.wire_message(), "Error");
        assert_eq!(AdminError::Conflict.wire_message(), "Error");
        assert_eq!(AdminError::Malformed.wire_message(), "Error");
        assert_eq!(AdminError::MissingField(None).wire_message(), "Error");
        assert_eq!(AdminError::NotFound(None).wire_message(), "Error");
    }

    #[test]
    fn labeled_rejections_expose_their_message() {
        assert_eq!(
            AdminError::MissingField(Some("task_id")).wire_message(),
            "Error: need task_id"
        );
        assert_eq!(
            AdminError::NotFound(Some("task not found")).wire_message(),
            "Error: task not found"
        );
        assert_eq!(AdminError::NotAdmin.wire_message(), "Error: you are not admin");
    }
}
