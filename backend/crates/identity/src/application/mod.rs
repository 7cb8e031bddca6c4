//! Application Layer
//!
//! Use cases orchestrating entity validation, the security services, and
//! repository calls.

pub mod add_user;
pub mod login_user;
pub mod logout_user;
pub mod refresh_authentication;
pub mod security;

// Re-exports
pub use add_user::AddUserUseCase;
pub use login_user::LoginUserUseCase;
pub use logout_user::LogoutUserUseCase;
pub use refresh_authentication::RefreshAuthenticationUseCase;
pub use security::{AuthenticationTokenManager, PasswordHash, TokenPayload};
