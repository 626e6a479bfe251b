use async_trait::async_trait;

use crate::domain::product::errors::ProductOperationError;
use crate::domain::product::model::Product;
use crate::domain::shared::context::RequestContext;
use crate::domain::shared::value_objects::UserId;

pub struct CreateProductParams {
    pub name: String,
    pub price: u64,
    /// Whatever the caller claims here is discarded; the authenticated
    /// identity becomes the seller.
    pub seller: Option<UserId>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        ctx: &RequestContext,
        params: CreateProductParams,
    ) -> Result<Product, ProductOperationError>;
}
