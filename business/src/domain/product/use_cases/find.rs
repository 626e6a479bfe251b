use async_trait::async_trait;

use crate::domain::product::errors::ProductOperationError;
use crate::domain::product::model::{FindRequest, Product};
use crate::domain::shared::context::RequestContext;

#[async_trait]
pub trait FindProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        ctx: &RequestContext,
        request: FindRequest,
    ) -> Result<Vec<Product>, ProductOperationError>;
}
