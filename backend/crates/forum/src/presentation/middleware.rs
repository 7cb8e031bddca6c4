//! Access Token Middleware
//!
//! Verifies the `Authorization: Bearer` access token and attaches the
//! caller's identity to the request as an extension. Handlers behind this
//! middleware read the identity with `Extension<AccessTokenIdentity>`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::token::TokenCodec;

/// Identity carried by a verified access token
#[derive(Debug, Clone)]
pub struct AccessTokenIdentity {
    pub user_id: kernel::id::UserId,
    pub username: String,
}

/// Middleware state
#[derive(Clone)]
pub struct AccessTokenState {
    pub codec: Arc<TokenCodec>,
}

/// Middleware that requires a valid access token
pub async fn require_access_token(
    state: AccessTokenState,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match bearer_token(req.headers()) {
        Some(token) => token,
        None => {
            tracing::debug!("Missing Authorization header");
            return Err(AppError::unauthorized("Missing authentication").into_response());
        }
    };

    let claims = match state.codec.verify_access_token(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Access token rejected");
            return Err(AppError::unauthorized("Missing authentication").into_response());
        }
    };

    req.extensions_mut().insert(AccessTokenIdentity {
        user_id: claims.id.into(),
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn bearer_token(headers: &axum::http::HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcg==".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_bearer_token_rejects_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer ".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
