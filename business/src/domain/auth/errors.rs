/// Authentication failures. None of these is produced for an anonymous
/// request: a missing `Authorization` header is not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.malformed_header")]
    MalformedHeader,
    #[error("auth.wrong_scheme")]
    WrongScheme,
    #[error("auth.invalid_token: {0}")]
    InvalidToken(String),
    #[error("auth.invalid_signature")]
    InvalidSignature,
    #[error("auth.token_expired")]
    TokenExpired,
    #[error("auth.malformed_claims: {0}")]
    MalformedClaims(String),
    #[error("auth.missing_subject")]
    MissingSubject,
    #[error("auth.key_unavailable: {0}")]
    KeyUnavailable(String),
}
