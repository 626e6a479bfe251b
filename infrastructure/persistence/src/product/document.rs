use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{CreateRequest, Product, UpdateRequest};
use business::domain::product::value_objects::ProductId;
use business::domain::shared::value_objects::UserId;

/// Stored fields of a product document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSource {
    pub name: String,
    pub price: u64,
    pub seller: String,
}

impl ProductSource {
    pub fn into_domain(self, id: impl Into<String>) -> Product {
        Product {
            id: ProductId::new(id),
            name: self.name,
            price: self.price,
            seller: UserId::new(self.seller),
        }
    }
}

impl From<&CreateRequest> for ProductSource {
    fn from(request: &CreateRequest) -> Self {
        Self {
            name: request.name.clone(),
            price: request.price,
            seller: request.seller.as_str().to_string(),
        }
    }
}

/// Body of a partial update. Absent fields are left out so the backend keeps
/// their stored values; the seller is never sent.
#[derive(Debug, Serialize)]
pub struct UpdateBody<'a> {
    pub doc: PartialSource<'a>,
}

#[derive(Debug, Serialize)]
pub struct PartialSource<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
}

impl<'a> From<&'a UpdateRequest> for UpdateBody<'a> {
    fn from(request: &'a UpdateRequest) -> Self {
        Self {
            doc: PartialSource {
                name: request.name.as_deref(),
                price: request.price,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Hits,
}

#[derive(Debug, Deserialize)]
pub struct Hits {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source")]
    pub source: ProductSource,
}

#[derive(Debug, Deserialize)]
pub struct GetResponse {
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source")]
    pub source: Option<ProductSource>,
}

#[derive(Debug, Deserialize)]
pub struct IndexResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub result: String,
    pub get: Option<UpdatedDocument>,
}

/// Document echoed back by an update when `_source_includes` is requested.
#[derive(Debug, Deserialize)]
pub struct UpdatedDocument {
    #[serde(rename = "_source")]
    pub source: ProductSource,
}

/// `{"error": {"type": ..., "reason": ...}}` as returned by a failed request.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorCause,
}

#[derive(Debug, Deserialize)]
pub struct ErrorCause {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub reason: String,
}

impl ErrorEnvelope {
    /// Decodes a failure body.
    ///
    /// `Ok(None)` when the body is not a JSON error envelope at all, such as an
    /// HTML page from a proxy or an empty body. An envelope without
    /// `error.reason` is rejected rather than reported with an empty reason.
    pub fn decode(body: &[u8]) -> Result<Option<Self>, RepositoryError> {
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
            return Ok(None);
        };
        if !value.get("error").is_some_and(serde_json::Value::is_object) {
            return Ok(None);
        }

        serde_json::from_value(value).map(Some).map_err(|e| {
            RepositoryError::MalformedResponse(format!("unreadable error body: {e}"))
        })
    }
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, RepositoryError> {
    serde_json::from_slice(body).map_err(|e| RepositoryError::MalformedResponse(e.to_string()))
}
