use business::domain::auth::errors::AuthError;
use jsonwebtoken::{Algorithm, DecodingKey};
use serde::Deserialize;

/// Material used to check token signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationKey {
    /// Shared secret for the `HS*` algorithms.
    Secret(String),
    /// PEM encoded public key for the asymmetric algorithms.
    Pem(String),
    /// Base64url RSA modulus and exponent.
    RsaComponents { n: String, e: String },
}

#[derive(Deserialize)]
struct RsaComponentsBody {
    n: String,
    e: String,
}

impl VerificationKey {
    /// Parses a key service response body: a PEM document or `{"n": .., "e": ..}`.
    pub fn from_key_service_body(body: &str) -> Result<Self, AuthError> {
        let body = body.trim();
        if body.starts_with("-----BEGIN") {
            return Ok(VerificationKey::Pem(body.to_string()));
        }

        serde_json::from_str::<RsaComponentsBody>(body)
            .map(|RsaComponentsBody { n, e }| VerificationKey::RsaComponents { n, e })
            .map_err(|e| AuthError::KeyUnavailable(format!("unrecognised key format: {e}")))
    }

    pub fn decoding_key(&self, algorithm: Algorithm) -> Result<DecodingKey, AuthError> {
        use Algorithm::*;

        let key = match (self, algorithm) {
            (VerificationKey::Secret(secret), HS256 | HS384 | HS512) => {
                Ok(DecodingKey::from_secret(secret.as_bytes()))
            }
            (VerificationKey::Pem(pem), RS256 | RS384 | RS512 | PS256 | PS384 | PS512) => {
                DecodingKey::from_rsa_pem(pem.as_bytes())
            }
            (VerificationKey::Pem(pem), ES256 | ES384) => DecodingKey::from_ec_pem(pem.as_bytes()),
            (VerificationKey::Pem(pem), EdDSA) => DecodingKey::from_ed_pem(pem.as_bytes()),
            (
                VerificationKey::RsaComponents { n, e },
                RS256 | RS384 | RS512 | PS256 | PS384 | PS512,
            ) => DecodingKey::from_rsa_components(n, e),
            (_, algorithm) => {
                return Err(AuthError::KeyUnavailable(format!(
                    "key does not fit algorithm {algorithm:?}"
                )));
            }
        };

        key.map_err(|e| AuthError::KeyUnavailable(e.to_string()))
    }
}

/// Downloads the token verification key from the key service.
pub async fn fetch_verification_key(
    client: &reqwest::Client,
    url: &str,
) -> Result<VerificationKey, AuthError> {
    tracing::info!("Fetching token verification key from {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AuthError::KeyUnavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Key service answered {}", status);
        return Err(AuthError::KeyUnavailable(format!(
            "key service responded with {status}"
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AuthError::KeyUnavailable(e.to_string()))?;

    VerificationKey::from_key_service_body(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_pem_body() {
        let body = "\n-----BEGIN PUBLIC KEY-----\nMFkw\n-----END PUBLIC KEY-----\n";

        let key = VerificationKey::from_key_service_body(body).unwrap();

        assert!(matches!(key, VerificationKey::Pem(pem) if pem.starts_with("-----BEGIN")));
    }

    #[test]
    fn should_read_rsa_components_body() {
        let key = VerificationKey::from_key_service_body(r#"{"n":"sXchDaQebHnP","e":"AQAB"}"#)
            .unwrap();

        assert!(matches!(key, VerificationKey::RsaComponents { ref e, .. } if e == "AQAB"));
        assert!(key.decoding_key(Algorithm::RS256).is_ok());
    }

    #[test]
    fn should_reject_unknown_body() {
        let result = VerificationKey::from_key_service_body("not a key");

        assert!(matches!(result, Err(AuthError::KeyUnavailable(_))));
    }

    #[test]
    fn should_reject_secret_for_asymmetric_algorithm() {
        let key = VerificationKey::Secret("s3cret".to_string());

        assert!(key.decoding_key(Algorithm::HS256).is_ok());
        assert!(matches!(
            key.decoding_key(Algorithm::RS256),
            Err(AuthError::KeyUnavailable(_))
        ));
    }

    #[test]
    fn should_reject_pem_that_does_not_parse() {
        let key = VerificationKey::Pem("-----BEGIN PUBLIC KEY-----\n!!\n-----END PUBLIC KEY-----".to_string());

        assert!(matches!(
            key.decoding_key(Algorithm::RS256),
            Err(AuthError::KeyUnavailable(_))
        ));
    }
}
