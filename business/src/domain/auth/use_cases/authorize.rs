use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

pub struct AuthorizeParams {
    /// Raw value of the `Authorization` header, if the request carried one.
    pub authorization: Option<String>,
}

#[async_trait]
pub trait AuthorizeUseCase: Send + Sync {
    /// Returns `Ok(None)` for anonymous requests.
    async fn execute(&self, params: AuthorizeParams) -> Result<Option<UserId>, AuthError>;
}
