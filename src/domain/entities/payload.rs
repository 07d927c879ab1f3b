//! Request payloads and field checks shared by the entity constructors.
//!
//! Payload fields are decoded as raw JSON values so that a missing field and
//! a wrongly typed one can be told apart.

use serde::Deserialize;
use serde_json::Value;

use crate::shared::validation::{Entity, ValidationError};

/// Body of `POST /threads`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThreadPayload {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub body: Option<Value>,
}

/// Body of the comment and reply creation endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentPayload {
    #[serde(default)]
    pub content: Option<Value>,
}

/// Whether a JSON field counts as absent.
fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// Check that every field is present, then that every field is a string.
///
/// All presence checks run before any type check.
pub(crate) fn require_strings<const N: usize>(
    entity: Entity,
    fields: [Option<&Value>; N],
) -> Result<[String; N], ValidationError> {
    if fields.iter().any(|f| is_absent(*f)) {
        return Err(ValidationError::missing(entity));
    }

    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, field) in out.iter_mut().zip(fields) {
        match field {
            Some(Value::String(s)) => *slot = s.clone(),
            _ => return Err(ValidationError::invalid_type(entity)),
        }
    }

    Ok(out)
}

/// Check that every trusted string (path parameter, caller id, stored
/// column) is non-empty.
pub(crate) fn require_present(entity: Entity, values: &[&str]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.is_empty()) {
        return Err(ValidationError::missing(entity));
    }
    Ok(())
}
