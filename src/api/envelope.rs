use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::AdminError;

/// Response on the admin surface. Always HTTP 200; the body is either the
/// `{"result": ...}` envelope or a bare payload (lists, task detail, the
/// login bearer token), matching what the platform's clients already parse.
#[derive(Debug)]
pub struct AdminResponse(Value);

impl AdminResponse {
    /// The `{"result": "Success"}` envelope.
    pub fn success() -> Self {
        Self(json!({ "result": "Success" }))
    }

    /// A bare JSON payload, serialized as-is.
    pub fn payload(data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self(value),
            Err(e) => {
                tracing::error!("failed to serialize admin response payload: {}", e);
                Self(json!({ "result": "Error" }))
            }
        }
    }

    #[cfg(test)]
    pub fn body(&self) -> &Value {
        &self.0
    }
}

impl IntoResponse for AdminResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

/// Handler result type for the admin surface.
pub type AdminResult = Result<AdminResponse, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let response = AdminResponse::success();
        assert_eq!(response.body(), &json!({ "result": "Success" }));
    }

    #[test]
    fn payload_is_bare() {
        let response = AdminResponse::payload(vec![1, 2, 3]);
        assert_eq!(response.body(), &json!([1, 2, 3]));
    }

    #[test]
    fn bare_string_payload_for_login_token() {
        let response = AdminResponse::payload("a1b2c3");
        assert_eq!(response.body(), &json!("a1b2c3"));
    }
}
