use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::TokenVerifier;
use crate::domain::auth::use_cases::authorize::{AuthorizeParams, AuthorizeUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

const BEARER_SCHEME: &str = "Bearer";

pub struct AuthorizeUseCaseImpl {
    pub verifier: Arc<dyn TokenVerifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AuthorizeUseCase for AuthorizeUseCaseImpl {
    async fn execute(&self, params: AuthorizeParams) -> Result<Option<UserId>, AuthError> {
        let token = match bearer_token(params.authorization.as_deref()) {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.logger.debug("Anonymous request");
                return Ok(None);
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Rejected Authorization header: {}", e));
                return Err(e);
            }
        };

        match self.verifier.verify(token).await {
            Ok(user_id) => {
                self.logger
                    .debug(&format!("Authenticated user: {}", user_id));
                Ok(Some(user_id))
            }
            Err(e) => {
                self.logger.warn(&format!("Token verification failed: {}", e));
                Err(e)
            }
        }
    }
}

/// Extracts the bearer token from an `Authorization` header value.
///
/// `Ok(None)` means the request is anonymous: no header, a blank header, or
/// the bare `Bearer` scheme with an empty token.
pub fn bearer_token(header: Option<&str>) -> Result<Option<&str>, AuthError> {
    let Some(header) = header else {
        return Ok(None);
    };

    let fields: Vec<&str> = header.split_whitespace().collect();
    match fields.as_slice() {
        [] => Ok(None),
        [scheme] if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => Ok(None),
        [scheme, token] => {
            if scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
                Ok(Some(*token))
            } else {
                Err(AuthError::WrongScheme)
            }
        }
        _ => Err(AuthError::MalformedHeader),
    }
}
