use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{
    PermissionDenied, ProductError, ProductOperation, ProductOperationError,
};
use crate::domain::product::model::{CreateRequest, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::shared::context::RequestContext;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CreateProductUseCaseImpl {
    async fn create(
        &self,
        ctx: &RequestContext,
        params: CreateProductParams,
    ) -> Result<Product, ProductError> {
        let Some(user_id) = ctx.user_id() else {
            self.logger
                .warn("Refusing to create product for anonymous caller");
            return Err(PermissionDenied::UserNotProvided.into());
        };

        if let Some(claimed) = &params.seller
            && claimed != user_id
        {
            self.logger.warn(&format!(
                "Ignoring claimed seller {} in favour of caller {}",
                claimed, user_id
            ));
        }

        let request = CreateRequest::new(params.name, params.price, user_id.clone())?;

        self.logger
            .info(&format!("Creating product: {}", request.name));

        let product = ctx.run(|| self.repository.create(&request)).await??;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(
        &self,
        ctx: &RequestContext,
        params: CreateProductParams,
    ) -> Result<Product, ProductOperationError> {
        self.create(ctx, params)
            .await
            .map_err(|e| ProductOperationError::new(ProductOperation::Create, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{FindRequest, UpdateRequest};
    use crate::domain::product::value_objects::ProductId;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find(&self, request: &FindRequest) -> Result<Vec<Product>, RepositoryError>;
            async fn find_one(&self, id: &ProductId) -> Result<Product, RepositoryError>;
            async fn create(&self, request: &CreateRequest) -> Result<Product, RepositoryError>;
            async fn update(&self, request: &UpdateRequest) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored(request: &CreateRequest) -> Product {
        Product {
            id: ProductId::new("generated-id"),
            name: request.name.clone(),
            price: request.price,
            seller: request.seller.clone(),
        }
    }

    #[tokio::test]
    async fn should_create_product_owned_by_caller() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|request| Ok(stored(request)));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(
                &RequestContext::for_user("u1"),
                CreateProductParams {
                    name: "X".to_string(),
                    price: 500,
                    seller: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::new("generated-id"));
        assert_eq!(product.price, 500);
        assert_eq!(product.seller, UserId::new("u1"));
    }

    #[tokio::test]
    async fn should_overwrite_claimed_seller_with_caller_identity() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .withf(|request| request.seller == UserId::new("u1"))
            .times(1)
            .returning(|request| Ok(stored(request)));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(
                &RequestContext::for_user("u1"),
                CreateProductParams {
                    name: "Guitar".to_string(),
                    price: 9900,
                    seller: Some(UserId::new("u2")),
                },
            )
            .await
            .unwrap();

        assert_eq!(product.seller, UserId::new("u1"));
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(
                &RequestContext::anonymous(),
                CreateProductParams {
                    name: "Guitar".to_string(),
                    price: 9900,
                    seller: Some(UserId::new("u2")),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.permission_denied(), Some(PermissionDenied::UserNotProvided));
        assert_eq!(
            err.to_string(),
            "create product: auth.permission_denied: user not provided"
        );
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(
                &RequestContext::for_user("u1"),
                CreateProductParams {
                    name: " ".to_string(),
                    price: 100,
                    seller: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err.kind(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_surface_backend_refusal_as_backend_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().returning(|_| {
            Err(RepositoryError::NotCreated {
                result: "noop".to_string(),
            })
        });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(
                &RequestContext::for_user("u1"),
                CreateProductParams {
                    name: "Desk".to_string(),
                    price: 100,
                    seller: None,
                },
            )
            .await
            .unwrap_err();

        assert!(err.is_backend_failure());
        assert!(!err.is_not_found());
    }
}
