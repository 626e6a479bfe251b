use async_trait::async_trait;
use business::domain::auth::errors::AuthError;
use business::domain::auth::services::TokenVerifier;
use business::domain::shared::value_objects::UserId;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::claims::Claims;
use crate::keys::VerificationKey;

/// What a token must satisfy besides a valid signature.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub algorithm: Algorithm,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    /// Clock skew tolerated on `exp` and `nbf`, in seconds.
    pub leeway: u64,
}

impl JwtSettings {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            issuer: None,
            audience: None,
            leeway: 5,
        }
    }
}

/// Local signature and temporal-claim verification with `jsonwebtoken`.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(key: &VerificationKey, settings: &JwtSettings) -> Result<Self, AuthError> {
        let decoding_key = key.decoding_key(settings.algorithm)?;

        let mut validation = Validation::new(settings.algorithm);
        // Tokens without `exp` are accepted; a present `exp` or `nbf` is enforced.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = settings.leeway;
        match &settings.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &settings.issuer {
            validation.set_issuer(&[issuer]);
        }

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    pub fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let error = map_jwt_error(e);
                tracing::debug!("Token rejected: {}", error);
                error
            })
    }
}

fn map_jwt_error(error: jsonwebtoken::errors::Error) -> AuthError {
    match error.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::Json(e) => AuthError::MalformedClaims(e.to_string()),
        _ => AuthError::InvalidToken(error.to_string()),
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        self.decode_claims(token)?.identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode, get_current_timestamp};
    use serde_json::{Value, json};

    const SECRET: &str = "market-test-secret";

    fn verifier() -> JwtTokenVerifier {
        JwtTokenVerifier::new(
            &VerificationKey::Secret(SECRET.to_string()),
            &JwtSettings::new(Algorithm::HS256),
        )
        .unwrap()
    }

    fn sign(claims: Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_verify_token_with_string_id() {
        let token = sign(json!({ "id": "u1", "exp": get_current_timestamp() + 600 }));

        let user_id = verifier().verify(&token).await.unwrap();

        assert_eq!(user_id, UserId::new("u1"));
    }

    #[tokio::test]
    async fn should_verify_token_with_integer_id() {
        let token = sign(json!({ "id": 42, "exp": get_current_timestamp() + 600 }));

        let user_id = verifier().verify(&token).await.unwrap();

        assert_eq!(user_id, UserId::new("42"));
    }

    #[tokio::test]
    async fn should_accept_token_without_expiry() {
        let token = sign(json!({ "id": "u1" }));

        assert!(verifier().verify(&token).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_expired_token() {
        let token = sign(json!({ "id": "u1", "exp": get_current_timestamp() - 3600 }));

        let result = verifier().verify(&token).await;

        assert_eq!(result, Err(AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn should_reject_token_signed_with_other_secret() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "id": "u1" }),
            &EncodingKey::from_secret(b"someone-else"),
        )
        .unwrap();

        let result = verifier().verify(&token).await;

        assert_eq!(result, Err(AuthError::InvalidSignature));
    }

    #[tokio::test]
    async fn should_reject_token_with_unsupported_id_type() {
        let token = sign(json!({ "id": [1, 2] }));

        let result = verifier().verify(&token).await;

        assert!(matches!(result, Err(AuthError::MalformedClaims(_))));
    }

    #[tokio::test]
    async fn should_reject_token_without_identity() {
        let token = sign(json!({ "sub": "u1" }));

        let result = verifier().verify(&token).await;

        assert_eq!(result, Err(AuthError::MissingSubject));
    }

    #[tokio::test]
    async fn should_reject_garbage_token() {
        let result = verifier().verify("not-a-jwt").await;

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn should_enforce_issuer_when_configured() {
        let mut settings = JwtSettings::new(Algorithm::HS256);
        settings.issuer = Some("market-users".to_string());
        let verifier =
            JwtTokenVerifier::new(&VerificationKey::Secret(SECRET.to_string()), &settings)
                .unwrap();

        let foreign = sign(json!({ "id": "u1", "iss": "elsewhere" }));
        let ours = sign(json!({ "id": "u1", "iss": "market-users" }));

        assert!(matches!(
            verifier.verify(&foreign).await,
            Err(AuthError::InvalidToken(_))
        ));
        assert_eq!(verifier.verify(&ours).await, Ok(UserId::new("u1")));
    }

    #[tokio::test]
    async fn should_ignore_audience_when_not_configured() {
        let token = sign(json!({ "id": "u1", "aud": "somebody" }));

        assert!(verifier().verify(&token).await.is_ok());
    }
}
