//! Authentication for the admin side of the portal.
//!
//! Credentials are email + argon2id password; a successful login issues a
//! signed, stateless bearer token. The token carries only the account ID,
//! so role and active status are re-read from the database on every
//! guarded request and can never go stale.

pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use error::AuthError;
pub use password::{hash_password, verify_password, PasswordHashError, MIN_PASSWORD_LENGTH};
pub use service::AuthService;
pub use token::{IssuedToken, TokenSigner};
