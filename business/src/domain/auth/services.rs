use async_trait::async_trait;

use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

/// Service port for verifying bearer tokens.
///
/// Implementations check the signature and the temporal claims and return
/// the normalized identity carried by the token.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}
