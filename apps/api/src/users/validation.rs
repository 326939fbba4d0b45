use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::user::NewUser;

/// Checks a decoded JSON body against the user payload shape.
///
/// Both `username` and `email` must be present as non-blank strings. Values
/// are trimmed; unknown keys are ignored. Every offending field is reported.
pub fn validate_user_payload(body: &Value) -> Result<NewUser, AppError> {
    let Some(object) = body.as_object() else {
        let mut errors = BTreeMap::new();
        errors.insert(
            "body".to_string(),
            "payload must be a JSON object".to_string(),
        );
        return Err(AppError::validation(errors));
    };

    let mut errors = BTreeMap::new();
    let username = required(object, "username", &mut errors);
    let email = required(object, "email", &mut errors);

    match (username, email) {
        (Some(username), Some(email)) => Ok(NewUser { username, email }),
        _ => Err(AppError::validation(errors)),
    }
}

/// Returns the trimmed value of `field`, or records why it was rejected.
fn required(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut BTreeMap<String, String>,
) -> Option<String> {
    let reason = match object.get(field) {
        None | Some(Value::Null) => format!("'{field}' is a required property"),
        Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
        Some(Value::String(_)) => format!("'{field}' must not be empty"),
        Some(_) => format!("'{field}' must be a string"),
    };
    errors.insert(field.to_string(), reason);
    None
}
