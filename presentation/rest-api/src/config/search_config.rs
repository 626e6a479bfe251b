use std::env;

use anyhow::Context;
use persistence::client::{RefreshPolicy, SearchClient, SearchConfig};

/// Reads the search backend settings through `lookup`.
///
/// Environment variables:
/// - ELASTICSEARCH_URL: backend base URL (default: "http://localhost:9200")
/// - ELASTICSEARCH_INDEX: product index (default: "products")
/// - ELASTICSEARCH_USERNAME / ELASTICSEARCH_PASSWORD: optional basic auth
/// - ELASTICSEARCH_REFRESH: "true", "false" or "wait_for" (default: "wait_for")
pub fn search_config_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<SearchConfig> {
    let mut config = SearchConfig::new(
        lookup("ELASTICSEARCH_URL").unwrap_or_else(|| "http://localhost:9200".to_string()),
        lookup("ELASTICSEARCH_INDEX").unwrap_or_else(|| "products".to_string()),
    );
    config.username = lookup("ELASTICSEARCH_USERNAME").filter(|value| !value.is_empty());
    config.password = lookup("ELASTICSEARCH_PASSWORD");
    if let Some(refresh) = lookup("ELASTICSEARCH_REFRESH") {
        config.refresh = refresh
            .parse::<RefreshPolicy>()
            .context("ELASTICSEARCH_REFRESH")?;
    }

    Ok(config)
}

/// Builds the search client and makes sure the product index exists.
pub async fn init_search() -> anyhow::Result<SearchClient> {
    let config = search_config_from(|key| env::var(key).ok())?;
    let client = SearchClient::new(&config)?;

    tracing::info!("Using search index {} at {}", config.index, config.url);
    client.ensure_index().await?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_use_defaults_when_nothing_is_set() {
        let config = search_config_from(lookup_in(&[])).unwrap();

        assert_eq!(config.url, "http://localhost:9200");
        assert_eq!(config.index, "products");
        assert_eq!(config.username, None);
        assert_eq!(config.refresh, RefreshPolicy::WaitFor);
    }

    #[test]
    fn should_read_credentials_and_refresh_policy() {
        let config = search_config_from(lookup_in(&[
            ("ELASTICSEARCH_URL", "https://search.internal:9243"),
            ("ELASTICSEARCH_INDEX", "market"),
            ("ELASTICSEARCH_USERNAME", "elastic"),
            ("ELASTICSEARCH_PASSWORD", "changeme"),
            ("ELASTICSEARCH_REFRESH", "false"),
        ]))
        .unwrap();

        assert_eq!(config.index, "market");
        assert_eq!(config.username.as_deref(), Some("elastic"));
        assert_eq!(config.password.as_deref(), Some("changeme"));
        assert_eq!(config.refresh, RefreshPolicy::Disabled);
    }

    #[test]
    fn should_fail_on_unknown_refresh_policy() {
        let result = search_config_from(lookup_in(&[("ELASTICSEARCH_REFRESH", "eventually")]));

        assert!(result.is_err());
    }
}
