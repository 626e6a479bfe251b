use std::sync::Arc;
use std::time::Duration;

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;
use business::domain::auth::use_cases::authorize::{AuthorizeParams, AuthorizeUseCase};
use business::domain::shared::context::RequestContext;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Turns the raw `Authorization` header into the per-request context handed
/// to the product use cases.
pub struct RequestAuthenticator {
    authorize_use_case: Arc<dyn AuthorizeUseCase>,
    request_timeout: Duration,
}

impl RequestAuthenticator {
    pub fn new(authorize_use_case: Arc<dyn AuthorizeUseCase>, request_timeout: Duration) -> Self {
        Self {
            authorize_use_case,
            request_timeout,
        }
    }

    pub async fn context(&self, authorization: Option<String>) -> Result<RequestContext, AuthError> {
        let user_id = self
            .authorize_use_case
            .execute(AuthorizeParams { authorization })
            .await?;

        Ok(RequestContext::new(user_id).with_timeout(self.request_timeout))
    }
}

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            AuthError::MalformedHeader => "auth.malformed_header",
            AuthError::WrongScheme => "auth.wrong_scheme",
            AuthError::InvalidToken(_) => "auth.invalid_token",
            AuthError::InvalidSignature => "auth.invalid_signature",
            AuthError::TokenExpired => "auth.token_expired",
            AuthError::MalformedClaims(_) => "auth.malformed_claims",
            AuthError::MissingSubject => "auth.missing_subject",
            AuthError::KeyUnavailable(_) => "auth.key_unavailable",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Unauthorized", message)),
        )
    }
}
