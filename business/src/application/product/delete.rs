use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{
    PermissionDenied, ProductError, ProductOperation, ProductOperationError,
};
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::shared::context::RequestContext;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl DeleteProductUseCaseImpl {
    async fn delete(
        &self,
        ctx: &RequestContext,
        params: DeleteProductParams,
    ) -> Result<Product, ProductError> {
        let Some(user_id) = ctx.user_id() else {
            self.logger
                .warn("Refusing to delete product for anonymous caller");
            return Err(PermissionDenied::UserNotProvided.into());
        };

        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let existing = ctx.run(|| self.repository.find_one(&params.id)).await??;
        if let Err(e) = existing.ensure_owned_by(user_id, PermissionDenied::NotOwnerDelete) {
            self.logger.warn(&format!(
                "User {} is not the seller of product {}",
                user_id, existing.id
            ));
            return Err(e);
        }

        let deleted = ctx.run(|| self.repository.delete(&params.id)).await??;

        self.logger.info(&format!("Product deleted: {}", deleted.id));
        Ok(deleted)
    }
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(
        &self,
        ctx: &RequestContext,
        params: DeleteProductParams,
    ) -> Result<Product, ProductOperationError> {
        self.delete(ctx, params)
            .await
            .map_err(|e| ProductOperationError::new(ProductOperation::Delete, e))
    }
}
