use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::find::FindProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductId;
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse, impl_from_error_response};
use crate::api::product::dto::{
    CreateProductRequest, DEFAULT_LIMIT, ProductQuery, ProductResponse, UpdateProductRequest,
};
use crate::api::security::RequestAuthenticator;
use crate::api::tags::ApiTags;

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

pub struct ProductApi {
    authenticator: Arc<RequestAuthenticator>,
    find_use_case: Arc<dyn FindProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        authenticator: Arc<RequestAuthenticator>,
        find_use_case: Arc<dyn FindProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            authenticator,
            find_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog API
///
/// Reads are public; writes require a bearer token and are limited to the
/// caller's own listings.
#[OpenApi]
impl ProductApi {
    /// Search products
    ///
    /// Fuzzy name match and inclusive price bounds; every given filter must
    /// match. Paged with `offset` and `limit` (default 10).
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        name: Query<Option<String>>,
        price_from: Query<Option<u64>>,
        price_to: Query<Option<u64>>,
        #[oai(default)] offset: Query<u64>,
        #[oai(default = "default_limit")] limit: Query<u64>,
    ) -> ListProductsResponse {
        let ctx = match self.authenticator.context(authorization.0).await {
            Ok(ctx) => ctx,
            Err(err) => return err.into_error_response().into(),
        };

        let query = ProductQuery {
            name: name.0,
            price_from: price_from.0,
            price_to: price_to.0,
            offset: offset.0,
            limit: limit.0,
        };

        match self.find_use_case.execute(&ctx, query.into()).await {
            Ok(products) => {
                ListProductsResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        id: Path<String>,
    ) -> GetProductResponse {
        let ctx = match self.authenticator.context(authorization.0).await {
            Ok(ctx) => ctx,
            Err(err) => return err.into_error_response().into(),
        };

        match self
            .get_by_id_use_case
            .execute(&ctx, GetProductByIdParams { id: ProductId::new(id.0) })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Create a product
    ///
    /// The authenticated caller becomes the seller; a `seller` in the body is ignored.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let ctx = match self.authenticator.context(authorization.0).await {
            Ok(ctx) => ctx,
            Err(err) => return err.into_error_response().into(),
        };

        let params = CreateProductParams {
            name: body.0.name,
            price: body.0.price,
            seller: body.0.seller.map(UserId::new),
        };

        match self.create_use_case.execute(&ctx, params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Update a product
    ///
    /// Only the seller may update a listing. Omitted fields are left unchanged.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let ctx = match self.authenticator.context(authorization.0).await {
            Ok(ctx) => ctx,
            Err(err) => return err.into_error_response().into(),
        };

        let params = UpdateProductParams {
            id: ProductId::new(id.0),
            name: body.0.name,
            price: body.0.price,
        };

        match self.update_use_case.execute(&ctx, params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Delete a product
    ///
    /// Only the seller may delete a listing. Returns the listing as it was
    /// right before removal.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(
        &self,
        #[oai(name = "Authorization")] authorization: Header<Option<String>>,
        id: Path<String>,
    ) -> DeleteProductResponse {
        let ctx = match self.authenticator.context(authorization.0).await {
            Ok(ctx) => ctx,
            Err(err) => return err.into_error_response().into(),
        };

        match self
            .delete_use_case
            .execute(&ctx, DeleteProductParams { id: ProductId::new(id.0) })
            .await
        {
            Ok(product) => DeleteProductResponse::Ok(Json(product.into())),
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

impl_from_error_response!(ListProductsResponse {
    401 => Unauthorized,
    502 => BadGateway,
    503 => ServiceUnavailable,
    504 => GatewayTimeout,
});

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

impl_from_error_response!(GetProductResponse {
    401 => Unauthorized,
    404 => NotFound,
    502 => BadGateway,
    503 => ServiceUnavailable,
    504 => GatewayTimeout,
});

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

impl_from_error_response!(CreateProductResponse {
    400 => BadRequest,
    401 => Unauthorized,
    403 => Forbidden,
    502 => BadGateway,
    503 => ServiceUnavailable,
    504 => GatewayTimeout,
});

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

impl_from_error_response!(UpdateProductResponse {
    400 => BadRequest,
    401 => Unauthorized,
    403 => Forbidden,
    404 => NotFound,
    502 => BadGateway,
    503 => ServiceUnavailable,
    504 => GatewayTimeout,
});

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

impl_from_error_response!(DeleteProductResponse {
    401 => Unauthorized,
    403 => Forbidden,
    404 => NotFound,
    502 => BadGateway,
    503 => ServiceUnavailable,
    504 => GatewayTimeout,
});
