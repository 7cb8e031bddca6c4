//! Authentication entities

use serde::Serialize;
use serde_json::Value;

use super::{LooseField, string_field};
use crate::error::{IdentityError, IdentityResult};

/// Token pair handed out on login.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuth {
    pub access_token: String,
    pub refresh_token: String,
}

/// Read the `refreshToken` field from a refresh or logout payload.
pub fn parse_refresh_token(payload: &Value) -> IdentityResult<String> {
    match string_field(payload, "refreshToken") {
        LooseField::Missing => Err(IdentityError::MissingRefreshToken),
        LooseField::WrongType => Err(IdentityError::RefreshTokenTypeMismatch),
        LooseField::Text(token) => Ok(token),
    }
}
