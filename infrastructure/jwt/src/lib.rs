//! Bearer token verification for the market API.

pub mod claims;
pub mod keys;
pub mod verifier;

pub use jsonwebtoken::Algorithm;
pub use keys::{VerificationKey, fetch_verification_key};
pub use verifier::{JwtSettings, JwtTokenVerifier};
