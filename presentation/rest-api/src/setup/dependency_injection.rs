use std::sync::Arc;
use std::time::Duration;

use logger::TracingLogger;
use persistence::client::SearchClient;
use persistence::product::repository::ProductRepositoryElasticsearch;

use business::application::auth::authorize::AuthorizeUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::find::FindProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::auth::services::TokenVerifier;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::security::RequestAuthenticator;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(
        search_client: SearchClient,
        verifier: Arc<dyn TokenVerifier>,
        request_timeout: Duration,
    ) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new(search_client.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryElasticsearch::new(search_client));

        let authenticator = Arc::new(RequestAuthenticator::new(
            Arc::new(AuthorizeUseCaseImpl {
                verifier,
                logger: logger.clone(),
            }),
            request_timeout,
        ));

        // Product use cases
        let find_use_case = Arc::new(FindProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = ProductApi::new(
            authenticator,
            find_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
