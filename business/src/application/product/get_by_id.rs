use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{ProductError, ProductOperation, ProductOperationError};
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use crate::domain::shared::context::RequestContext;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetProductByIdUseCaseImpl {
    async fn get(
        &self,
        ctx: &RequestContext,
        params: GetProductByIdParams,
    ) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = ctx.run(|| self.repository.find_one(&params.id)).await??;
        Ok(product)
    }
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(
        &self,
        ctx: &RequestContext,
        params: GetProductByIdParams,
    ) -> Result<Product, ProductOperationError> {
        self.get(ctx, params)
            .await
            .map_err(|e| ProductOperationError::new(ProductOperation::Get, e))
    }
}
