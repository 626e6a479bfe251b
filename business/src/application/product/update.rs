use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{
    PermissionDenied, ProductError, ProductOperation, ProductOperationError,
};
use crate::domain::product::model::{Product, UpdateRequest};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::context::RequestContext;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCaseImpl {
    async fn update(
        &self,
        ctx: &RequestContext,
        request: UpdateRequest,
    ) -> Result<Product, ProductError> {
        let Some(user_id) = ctx.user_id() else {
            self.logger
                .warn("Refusing to update product for anonymous caller");
            return Err(PermissionDenied::UserNotProvided.into());
        };

        self.logger
            .info(&format!("Updating product: {}", request.id));

        // Ownership is checked against the stored record, fetched fresh.
        // Not atomic with the write below: a concurrent change can slip in
        // between the check and the update.
        let existing = ctx.run(|| self.repository.find_one(&request.id)).await??;
        if let Err(e) = existing.ensure_owned_by(user_id, PermissionDenied::NotOwnerUpdate) {
            self.logger.warn(&format!(
                "User {} is not the seller of product {}",
                user_id, existing.id
            ));
            return Err(e);
        }

        request.validate()?;

        let updated = ctx.run(|| self.repository.update(&request)).await??;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(
        &self,
        ctx: &RequestContext,
        params: UpdateProductParams,
    ) -> Result<Product, ProductOperationError> {
        self.update(ctx, params.into())
            .await
            .map_err(|e| ProductOperationError::new(ProductOperation::Update, e))
    }
}
