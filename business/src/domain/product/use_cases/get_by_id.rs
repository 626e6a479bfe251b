use async_trait::async_trait;

use crate::domain::product::errors::ProductOperationError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::context::RequestContext;

pub struct GetProductByIdParams {
    pub id: ProductId,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        ctx: &RequestContext,
        params: GetProductByIdParams,
    ) -> Result<Product, ProductOperationError>;
}
