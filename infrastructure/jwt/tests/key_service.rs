use auth_jwt::{VerificationKey, fetch_verification_key};
use business::domain::auth::errors::AuthError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PEM: &str = "-----BEGIN PUBLIC KEY-----\nMCowBQYDK2VwAyEAGb9ECWmEzf6FQbrBZ9w7lshQhqowtrbLDFw4rXAxZuE=\n-----END PUBLIC KEY-----\n";

#[tokio::test]
async fn should_fetch_pem_key_from_key_service() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/keys/public"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PEM))
        .expect(1)
        .mount(&mock_server)
        .await;

    let key = fetch_verification_key(
        &reqwest::Client::new(),
        &format!("{}/keys/public", mock_server.uri()),
    )
    .await
    .unwrap();

    assert_eq!(key, VerificationKey::Pem(PEM.trim().to_string()));
}

#[tokio::test]
async fn should_fetch_rsa_components_from_key_service() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/keys/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "n": "sXchDaQebHnP",
            "e": "AQAB"
        })))
        .mount(&mock_server)
        .await;

    let key = fetch_verification_key(
        &reqwest::Client::new(),
        &format!("{}/keys/public", mock_server.uri()),
    )
    .await
    .unwrap();

    assert_eq!(
        key,
        VerificationKey::RsaComponents {
            n: "sXchDaQebHnP".to_string(),
            e: "AQAB".to_string(),
        }
    );
}

#[tokio::test]
async fn should_report_key_unavailable_when_service_fails() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/keys/public"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let result = fetch_verification_key(
        &reqwest::Client::new(),
        &format!("{}/keys/public", mock_server.uri()),
    )
    .await;

    assert!(matches!(result, Err(AuthError::KeyUnavailable(reason)) if reason.contains("503")));
}

#[tokio::test]
async fn should_report_key_unavailable_when_service_unreachable() {
    let result = fetch_verification_key(&reqwest::Client::new(), "http://127.0.0.1:9/keys").await;

    assert!(matches!(result, Err(AuthError::KeyUnavailable(_))));
}
