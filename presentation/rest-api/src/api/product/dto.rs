use poem_openapi::Object;

use business::domain::product::model::{FindRequest, Product};
use business::domain::product::value_objects::PriceRange;

pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Price in the smallest currency unit
    pub price: u64,
    /// Ignored: the authenticated caller always becomes the seller
    #[oai(skip_serializing_if_is_none)]
    pub seller: Option<String>,
}

/// Partial update: omitted fields keep their stored values.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductResponse {
    /// Identifier assigned by the store
    pub id: String,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: u64,
    /// User id of the owner
    pub seller: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: product.price,
            seller: product.seller.into_inner(),
        }
    }
}

/// Query string of `GET /products`.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub name: Option<String>,
    pub price_from: Option<u64>,
    pub price_to: Option<u64>,
    pub offset: u64,
    pub limit: u64,
}

impl From<ProductQuery> for FindRequest {
    fn from(query: ProductQuery) -> Self {
        let price_range = (query.price_from.is_some() || query.price_to.is_some())
            .then(|| PriceRange::new(query.price_from, query.price_to));

        Self {
            name: query.name.filter(|name| !name.trim().is_empty()),
            price_range,
            offset: query.offset,
            limit: query.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::ProductId;
    use business::domain::shared::value_objects::UserId;

    #[test]
    fn should_build_find_request_with_only_lower_price_bound() {
        let request: FindRequest = ProductQuery {
            price_from: Some(100),
            limit: DEFAULT_LIMIT,
            ..ProductQuery::default()
        }
        .into();

        assert_eq!(request.price_range, Some(PriceRange::new(Some(100), None)));
        assert_eq!(request.name, None);
        assert_eq!(request.limit, 10);
    }

    #[test]
    fn should_drop_blank_name_filter_and_absent_range() {
        let request: FindRequest = ProductQuery {
            name: Some("  ".to_string()),
            offset: 5,
            limit: 20,
            ..ProductQuery::default()
        }
        .into();

        assert!(!request.has_filters());
        assert_eq!(request.offset, 5);
    }

    #[test]
    fn should_expose_product_fields() {
        let response = ProductResponse::from(Product {
            id: ProductId::new("p1"),
            name: "Lamp".to_string(),
            price: 1200,
            seller: UserId::new("u1"),
        });

        assert_eq!(response.id, "p1");
        assert_eq!(response.seller, "u1");
    }
}
