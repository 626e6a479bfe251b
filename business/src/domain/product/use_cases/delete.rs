use async_trait::async_trait;

use crate::domain::product::errors::ProductOperationError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::context::RequestContext;

pub struct DeleteProductParams {
    pub id: ProductId,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Returns the listing as it was right before it was removed.
    async fn execute(
        &self,
        ctx: &RequestContext,
        params: DeleteProductParams,
    ) -> Result<Product, ProductOperationError>;
}
