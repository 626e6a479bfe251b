use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{CreateRequest, FindRequest, Product, UpdateRequest};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::document::{
    ErrorEnvelope, GetResponse, IndexResponse, ProductSource, SearchResponse, UpdateBody,
    UpdateResponse, decode,
};
use super::query::search_body;
use crate::client::SearchClient;

const CREATED: &str = "created";
const SOURCE_FIELDS: &str = "name,price,seller";

struct RawResponse {
    status: StatusCode,
    body: Vec<u8>,
}

/// Products stored one document per listing in a search index.
pub struct ProductRepositoryElasticsearch {
    client: SearchClient,
}

impl ProductRepositoryElasticsearch {
    pub fn new(client: SearchClient) -> Self {
        Self { client }
    }

    async fn send(&self, request: RequestBuilder) -> Result<RawResponse, RepositoryError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Search backend unreachable: {}", e);
            RepositoryError::Transport(e.to_string())
        })?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?
            .to_vec();
        Ok(RawResponse { status, body })
    }

    fn refresh(&self) -> [(&'static str, &'static str); 1] {
        [("refresh", self.client.refresh().as_str())]
    }
}

/// Maps a non-2xx answer on a single-document call.
fn document_failure(status: StatusCode) -> RepositoryError {
    if status == StatusCode::NOT_FOUND {
        RepositoryError::NotFound
    } else {
        tracing::warn!("Search backend answered {}", status);
        RepositoryError::Backend {
            status: status.as_u16(),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryElasticsearch {
    async fn find(&self, request: &FindRequest) -> Result<Vec<Product>, RepositoryError> {
        let body = search_body(request);
        tracing::debug!("Searching index {}: {}", self.client.index(), body);

        let url = self.client.endpoint(&["_search"]);
        let raw = self
            .send(self.client.request(Method::POST, url).json(&body))
            .await?;

        if !raw.status.is_success() {
            let Some(envelope) = ErrorEnvelope::decode(&raw.body)? else {
                tracing::warn!("Search answered {} without an error envelope", raw.status);
                return Err(RepositoryError::Backend {
                    status: raw.status.as_u16(),
                });
            };
            tracing::warn!(
                "Search rejected with status {}: {}",
                raw.status,
                envelope.error.reason
            );
            return Err(RepositoryError::Search {
                reason: envelope.error.reason,
            });
        }

        let response: SearchResponse = decode(&raw.body)?;
        Ok(response
            .hits
            .hits
            .into_iter()
            .map(|hit| hit.source.into_domain(hit.id))
            .collect())
    }

    async fn find_one(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        tracing::debug!("Fetching document {}", id);

        let url = self.client.endpoint(&["_doc", id.as_str()]);
        let raw = self.send(self.client.request(Method::GET, url)).await?;
        if !raw.status.is_success() {
            return Err(document_failure(raw.status));
        }

        let response: GetResponse = decode(&raw.body)?;
        match (response.found, response.source) {
            (true, Some(source)) => Ok(source.into_domain(response.id)),
            _ => Err(RepositoryError::NotFound),
        }
    }

    async fn create(&self, request: &CreateRequest) -> Result<Product, RepositoryError> {
        tracing::debug!("Indexing new document for seller {}", request.seller);

        let url = self.client.endpoint(&["_doc"]);
        let raw = self
            .send(
                self.client
                    .request(Method::POST, url)
                    .query(&self.refresh())
                    .json(&ProductSource::from(request)),
            )
            .await?;
        if !raw.status.is_success() {
            tracing::warn!("Index request answered {}", raw.status);
            return Err(RepositoryError::Backend {
                status: raw.status.as_u16(),
            });
        }

        let response: IndexResponse = decode(&raw.body)?;
        if response.result != CREATED {
            tracing::warn!("Document not created, result: {}", response.result);
            return Err(RepositoryError::NotCreated {
                result: response.result,
            });
        }

        Ok(Product {
            id: ProductId::new(response.id),
            name: request.name.clone(),
            price: request.price,
            seller: request.seller.clone(),
        })
    }

    async fn update(&self, request: &UpdateRequest) -> Result<Product, RepositoryError> {
        tracing::debug!("Updating document {}", request.id);

        let url = self.client.endpoint(&["_update", request.id.as_str()]);
        let raw = self
            .send(
                self.client
                    .request(Method::POST, url)
                    .query(&[("_source_includes", SOURCE_FIELDS)])
                    .query(&self.refresh())
                    .json(&UpdateBody::from(request)),
            )
            .await?;
        if !raw.status.is_success() {
            return Err(document_failure(raw.status));
        }

        let response: UpdateResponse = decode(&raw.body)?;
        tracing::debug!("Update of {} finished: {}", response.id, response.result);
        let document = response.get.ok_or_else(|| {
            RepositoryError::MalformedResponse("update response without document".to_string())
        })?;
        Ok(document.source.into_domain(response.id))
    }

    async fn delete(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        // Last known state; another writer may still change it before the delete lands.
        let existing = self.find_one(id).await?;

        tracing::debug!("Deleting document {}", id);
        let url = self.client.endpoint(&["_doc", id.as_str()]);
        let raw = self
            .send(
                self.client
                    .request(Method::DELETE, url)
                    .query(&self.refresh()),
            )
            .await?;
        if !raw.status.is_success() {
            return Err(document_failure(raw.status));
        }

        Ok(existing)
    }
}
