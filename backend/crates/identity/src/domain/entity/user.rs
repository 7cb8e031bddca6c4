//! User entities

use kernel::id::UserId;
use platform::password::ClearTextPassword;
use serde::Serialize;
use serde_json::Value;

use super::{LooseField, string_field};
use crate::error::{IdentityError, IdentityResult};

/// Maximum username length, in characters.
pub const USERNAME_CHAR_LIMIT: usize = 50;

/// Validated payload for registering a user.
///
/// The clear text password never leaves this struct unhashed; it is
/// zeroized on drop.
#[derive(Debug)]
pub struct RegisterUser {
    pub username: String,
    pub password: ClearTextPassword,
    pub fullname: String,
}

impl RegisterUser {
    /// Parse and validate a loose payload.
    ///
    /// Checks run in order: presence of all three fields, then type, then
    /// the username length limit, then the username character whitelist
    /// (ASCII letters, digits, underscore).
    pub fn parse(payload: &Value) -> IdentityResult<Self> {
        let username = string_field(payload, "username");
        let password = string_field(payload, "password");
        let fullname = string_field(payload, "fullname");

        if matches!(username, LooseField::Missing)
            || matches!(password, LooseField::Missing)
            || matches!(fullname, LooseField::Missing)
        {
            return Err(IdentityError::RegisterUserMissingProperty);
        }

        let (LooseField::Text(username), LooseField::Text(password), LooseField::Text(fullname)) =
            (username, password, fullname)
        else {
            return Err(IdentityError::RegisterUserTypeMismatch);
        };

        if username.chars().count() > USERNAME_CHAR_LIMIT {
            return Err(IdentityError::UsernameTooLong);
        }

        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(IdentityError::UsernameRestrictedCharacter);
        }

        Ok(Self {
            username,
            password: ClearTextPassword::new(password),
            fullname,
        })
    }
}

/// User as acknowledged right after registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub username: String,
    pub fullname: String,
}

/// Validated login payload.
#[derive(Debug)]
pub struct UserLogin {
    pub username: String,
    pub password: ClearTextPassword,
}

impl UserLogin {
    pub fn parse(payload: &Value) -> IdentityResult<Self> {
        let username = string_field(payload, "username");
        let password = string_field(payload, "password");

        if matches!(username, LooseField::Missing) || matches!(password, LooseField::Missing) {
            return Err(IdentityError::LoginMissingProperty);
        }

        let (LooseField::Text(username), LooseField::Text(password)) = (username, password) else {
            return Err(IdentityError::LoginTypeMismatch);
        };

        Ok(Self {
            username,
            password: ClearTextPassword::new(password),
        })
    }
}
