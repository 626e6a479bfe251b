use std::env;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, bail};
use auth_jwt::{Algorithm, JwtSettings, JwtTokenVerifier, VerificationKey, fetch_verification_key};
use business::domain::auth::services::TokenVerifier;

/// Where the verification key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    Static(VerificationKey),
    KeyService(String),
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub settings: JwtSettings,
    pub key: KeySource,
}

impl JwtConfig {
    /// Environment variables:
    /// - JWT_ALG: verification algorithm (default: "HS256")
    /// - JWT_SECRET: shared secret, required for HS*
    /// - JWT_PUBLIC_KEY: PEM public key for the asymmetric algorithms
    /// - KEY_SERVICE_URL: fetched at startup when JWT_PUBLIC_KEY is not set
    /// - JWT_ISSUER / JWT_AUDIENCE: checked only when set
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let algorithm = match var("JWT_ALG") {
            Some(alg) => Algorithm::from_str(alg.trim())
                .with_context(|| format!("JWT_ALG is not a supported algorithm: {alg:?}"))?,
            None => Algorithm::HS256,
        };

        let key = if matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            match var("JWT_SECRET") {
                Some(secret) => KeySource::Static(VerificationKey::Secret(secret)),
                None => bail!("JWT_SECRET must be set for {algorithm:?}"),
            }
        } else if let Some(pem) = var("JWT_PUBLIC_KEY") {
            KeySource::Static(VerificationKey::Pem(pem))
        } else if let Some(url) = var("KEY_SERVICE_URL") {
            KeySource::KeyService(url)
        } else {
            bail!("JWT_PUBLIC_KEY or KEY_SERVICE_URL must be set for {algorithm:?}");
        };

        let mut settings = JwtSettings::new(algorithm);
        settings.issuer = var("JWT_ISSUER");
        settings.audience = var("JWT_AUDIENCE");

        Ok(Self { settings, key })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

/// Resolves the key, fetching it from the key service if needed, and builds the verifier.
pub async fn init_token_verifier(config: JwtConfig) -> anyhow::Result<Arc<dyn TokenVerifier>> {
    let key = match config.key {
        KeySource::Static(key) => key,
        KeySource::KeyService(url) => fetch_verification_key(&reqwest::Client::new(), &url)
            .await
            .context("could not retrieve token verification key")?,
    };

    let verifier = JwtTokenVerifier::new(&key, &config.settings)?;
    tracing::info!("Token verification ready ({:?})", config.settings.algorithm);

    Ok(Arc::new(verifier))
}
