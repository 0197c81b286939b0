//! Auth module: bearer-token issuance and verification.
//!
//! Issuance authenticates nothing; a token only attests that its payload was
//! signed with the server secret and has not expired.

pub mod domain;
pub mod errors;
pub mod service;

pub use domain::AuthClaims;
pub use errors::AuthError;
pub use service::TokenService;
