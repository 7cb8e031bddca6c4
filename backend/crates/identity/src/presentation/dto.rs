//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::entity::RegisteredUser;

/// Uniform success envelope
#[derive(Debug, Serialize)]
pub struct SuccessBody<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> SuccessBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Data for POST /users
#[derive(Debug, Serialize)]
pub struct AddedUserData {
    #[serde(rename = "addedUser")]
    pub added_user: RegisteredUser,
}

/// Data for PUT /authentications
#[derive(Debug, Serialize)]
pub struct AccessTokenData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Body for DELETE /authentications, which carries no data key
#[derive(Debug, Serialize)]
pub struct StatusOnlyBody {
    pub status: &'static str,
}

impl StatusOnlyBody {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
