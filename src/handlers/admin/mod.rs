pub mod activity;
pub mod authors;
pub mod info;
pub mod login;
pub mod subjects;
pub mod tasks;
pub mod users;

// Re-export handler functions for use in routing
pub use activity::post as activity_snapshot;
pub use authors::post as create_author;
pub use info::post as info;
pub use login::post as login;
pub use subjects::create as create_subject;
pub use subjects::define as define_subject;
pub use tasks::post as task_detail;
pub use users::improved as test_user_list;
pub use users::all as user_list;

use axum::body::Bytes;
use serde_json::Value;

use crate::error::AdminError;

/// Parse the raw request body as JSON. The admin surface never lets a bad
/// body escalate past the handler; it becomes the generic error envelope.
pub(crate) fn parse_body(bytes: &Bytes) -> Result<Value, AdminError> {
    serde_json::from_slice(bytes).map_err(|_| AdminError::Malformed)
}

/// Pull a required string field out of the parsed body.
pub(crate) fn required_str<'a>(body: &'a Value, field: &str) -> Result<&'a str, AdminError> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or(AdminError::MissingField(None))
}
