use std::str::FromStr;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde_json::json;
use thiserror::Error;

use crate::product::document::ErrorEnvelope;

#[derive(Error, Debug)]
pub enum SearchSetupError {
    #[error("search.invalid_url: {0}")]
    InvalidUrl(String),
    #[error("search.client_build_error: {0}")]
    ClientBuild(String),
    #[error("search.invalid_refresh_policy: {0}")]
    InvalidRefreshPolicy(String),
    #[error("search.index_creation_error: {0}")]
    IndexCreation(String),
}

/// Value of the `refresh` parameter sent with every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Refresh the affected shards right away.
    Immediate,
    /// Leave visibility to the periodic refresh.
    Disabled,
    /// Block the write until the change is searchable.
    #[default]
    WaitFor,
}

impl RefreshPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshPolicy::Immediate => "true",
            RefreshPolicy::Disabled => "false",
            RefreshPolicy::WaitFor => "wait_for",
        }
    }
}

impl FromStr for RefreshPolicy {
    type Err = SearchSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "" => Ok(RefreshPolicy::Immediate),
            "false" => Ok(RefreshPolicy::Disabled),
            "wait_for" => Ok(RefreshPolicy::WaitFor),
            other => Err(SearchSetupError::InvalidRefreshPolicy(other.to_string())),
        }
    }
}

/// Connection settings for the search backend.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub url: String,
    pub index: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub refresh: RefreshPolicy,
    pub request_timeout: Duration,
}

impl SearchConfig {
    /// Creates a configuration with default values
    pub fn new(url: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            index: index.into(),
            username: None,
            password: None,
            refresh: RefreshPolicy::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client bound to a single index. Cheap to clone; clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: Url,
    index: String,
    credentials: Option<(String, Option<String>)>,
    refresh: RefreshPolicy,
}

impl SearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchSetupError> {
        let base_url =
            Url::parse(&config.url).map_err(|e| SearchSetupError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(SearchSetupError::InvalidUrl(config.url.clone()));
        }

        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SearchSetupError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            index: config.index.clone(),
            credentials: config
                .username
                .clone()
                .map(|username| (username, config.password.clone())),
            refresh: config.refresh,
        })
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn refresh(&self) -> RefreshPolicy {
        self.refresh
    }

    /// `<base>/<index>/<segments...>`, each segment percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(&self.index).extend(segments);
        }
        url
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.credentials {
            Some((username, password)) => builder.basic_auth(username, password.as_ref()),
            None => builder,
        }
    }

    /// True when the cluster answers its root endpoint with a success status.
    pub async fn ping(&self) -> bool {
        match self.request(Method::GET, self.base_url.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Search backend ping failed: {}", e);
                false
            }
        }
    }

    /// Creates the index with the product mapping unless it already exists.
    pub async fn ensure_index(&self) -> Result<(), SearchSetupError> {
        let mapping = json!({
            "mappings": {
                "properties": {
                    "name": { "type": "text" },
                    "price": { "type": "long" },
                    "seller": { "type": "keyword" }
                }
            }
        });

        let response = self
            .request(Method::PUT, self.endpoint(&[]))
            .json(&mapping)
            .send()
            .await
            .map_err(|e| SearchSetupError::IndexCreation(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Created search index {}", self.index);
            return Ok(());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchSetupError::IndexCreation(e.to_string()))?;
        let already_exists = status == StatusCode::BAD_REQUEST
            && matches!(
                ErrorEnvelope::decode(&body),
                Ok(Some(envelope)) if envelope.error.kind.as_deref() == Some(INDEX_EXISTS)
            );

        if already_exists {
            tracing::debug!("Search index {} already exists", self.index);
            Ok(())
        } else {
            Err(SearchSetupError::IndexCreation(format!(
                "status {}: {}",
                status,
                String::from_utf8_lossy(&body)
            )))
        }
    }
}

const INDEX_EXISTS: &str = "resource_already_exists_exception";
