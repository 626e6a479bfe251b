use async_trait::async_trait;

use crate::domain::product::errors::ProductOperationError;
use crate::domain::product::model::{Product, UpdateRequest};
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::context::RequestContext;

pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: Option<String>,
    pub price: Option<u64>,
}

impl From<UpdateProductParams> for UpdateRequest {
    fn from(params: UpdateProductParams) -> Self {
        UpdateRequest {
            id: params.id,
            name: params.name,
            price: params.price,
        }
    }
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        ctx: &RequestContext,
        params: UpdateProductParams,
    ) -> Result<Product, ProductOperationError>;
}
