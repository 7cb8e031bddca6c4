//! Platform - Credential primitives shared across domains
//!
//! Concrete implementations of the security capabilities the domain crates
//! consume through traits:
//! - `password` - Argon2id hashing and verification
//! - `token` - HS256 JWT access/refresh token codec

pub mod password;
pub mod token;
