use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{CreateRequest, FindRequest, Product, UpdateRequest};
use super::value_objects::ProductId;

/// Persistence port for product listings.
///
/// Missing documents are always reported as [`RepositoryError::NotFound`],
/// never as a generic backend error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find(&self, request: &FindRequest) -> Result<Vec<Product>, RepositoryError>;
    async fn find_one(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    /// Stores a new listing; the backend assigns the id.
    async fn create(&self, request: &CreateRequest) -> Result<Product, RepositoryError>;
    /// Merges the present fields and returns the full document after the update.
    async fn update(&self, request: &UpdateRequest) -> Result<Product, RepositoryError>;
    /// Removes the listing and returns it as it was just before deletion.
    async fn delete(&self, id: &ProductId) -> Result<Product, RepositoryError>;
}
