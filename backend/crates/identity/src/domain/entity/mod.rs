//! Domain Entities
//!
//! `RegisterUser` and `UserLogin` are parsed from loose JSON payloads with
//! a two-phase presence/type check; `RegisteredUser` and `NewAuth` are
//! response shapes.

pub mod authentication;
pub mod user;

pub use authentication::{NewAuth, parse_refresh_token};
pub use user::{RegisterUser, RegisteredUser, UserLogin};

use serde_json::Value;

/// Outcome of reading one loosely-typed payload field.
///
/// Presence is checked first, with JSON-level falsiness counting as absent
/// (missing key, `null`, empty string, `0`, `false`); only a present,
/// truthy, non-string value is a type mismatch.
pub(crate) enum LooseField {
    Missing,
    WrongType,
    Text(String),
}

pub(crate) fn string_field(payload: &Value, key: &str) -> LooseField {
    match payload.get(key) {
        None | Some(Value::Null) => LooseField::Missing,
        Some(Value::String(s)) if s.is_empty() => LooseField::Missing,
        Some(Value::String(s)) => LooseField::Text(s.clone()),
        Some(Value::Bool(false)) => LooseField::Missing,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => LooseField::Missing,
        Some(_) => LooseField::WrongType,
    }
}
