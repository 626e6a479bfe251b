use super::errors::{PermissionDenied, ProductError};
use super::value_objects::{PriceRange, ProductId};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Smallest currency unit.
    pub price: u64,
    /// Owner of the listing. Set once on creation and never changed.
    pub seller: UserId,
}

impl Product {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.seller == user_id
    }

    /// Fails with `denied` unless `user_id` is the stored seller.
    pub fn ensure_owned_by(
        &self,
        user_id: &UserId,
        denied: PermissionDenied,
    ) -> Result<(), ProductError> {
        if self.is_owned_by(user_id) {
            Ok(())
        } else {
            Err(ProductError::Permission(denied))
        }
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}

/// Largest price the index can hold; `price` is mapped as a signed 64-bit `long`.
pub const MAX_PRICE: u64 = i64::MAX as u64;

fn validate_price(price: u64) -> Result<(), ProductError> {
    if price > MAX_PRICE {
        return Err(ProductError::PriceOutOfRange);
    }
    Ok(())
}

/// Filters and paging for a catalog search. All present filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindRequest {
    /// Fuzzy match against the product name.
    pub name: Option<String>,
    pub price_range: Option<PriceRange>,
    pub offset: u64,
    pub limit: u64,
}

impl FindRequest {
    /// The price filter, dropped when both ends are open since it would match everything.
    pub fn bounded_price_range(&self) -> Option<PriceRange> {
        self.price_range.filter(|range| !range.is_unbounded())
    }

    pub fn has_filters(&self) -> bool {
        self.name.is_some() || self.bounded_price_range().is_some()
    }
}

/// A validated listing ready to be stored. The seller is always the
/// authenticated caller, never a value taken from the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub name: String,
    pub price: u64,
    pub seller: UserId,
}

impl CreateRequest {
    pub fn new(name: String, price: u64, seller: UserId) -> Result<Self, ProductError> {
        validate_name(&name)?;
        validate_price(price)?;
        Ok(Self {
            name,
            price,
            seller,
        })
    }
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub id: ProductId,
    pub name: Option<String>,
    pub price: Option<u64>,
}

impl UpdateRequest {
    pub fn validate(&self) -> Result<(), ProductError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }

    /// Applies the present fields to `product`. The seller is never touched.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}
