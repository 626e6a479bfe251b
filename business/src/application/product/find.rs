use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{ProductError, ProductOperation, ProductOperationError};
use crate::domain::product::model::{FindRequest, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find::FindProductsUseCase;
use crate::domain::shared::context::RequestContext;

pub struct FindProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl FindProductsUseCaseImpl {
    async fn find(
        &self,
        ctx: &RequestContext,
        request: FindRequest,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Searching products (name: {:?}, offset: {}, limit: {})",
            request.name, request.offset, request.limit
        ));

        let products = ctx.run(|| self.repository.find(&request)).await??;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[async_trait]
impl FindProductsUseCase for FindProductsUseCaseImpl {
    async fn execute(
        &self,
        ctx: &RequestContext,
        request: FindRequest,
    ) -> Result<Vec<Product>, ProductOperationError> {
        self.find(ctx, request)
            .await
            .map_err(|e| ProductOperationError::new(ProductOperation::List, e))
    }
}
