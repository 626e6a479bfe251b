use crate::domain::errors::RepositoryError;
use crate::domain::shared::context::Interrupted;

/// Reason a caller was refused a product operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PermissionDenied {
    #[error("user not provided")]
    UserNotProvided,
    #[error("only own products allowed to update")]
    NotOwnerUpdate,
    #[error("only own products allowed to delete")]
    NotOwnerDelete,
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_out_of_range")]
    PriceOutOfRange,
    #[error("product.not_found")]
    NotFound,
    #[error("auth.permission_denied: {0}")]
    Permission(PermissionDenied),
    #[error("request.cancelled")]
    Cancelled,
    #[error("request.deadline_exceeded")]
    DeadlineExceeded,
    #[error("{0}")]
    Repository(#[source] RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}

impl From<PermissionDenied> for ProductError {
    fn from(reason: PermissionDenied) -> Self {
        ProductError::Permission(reason)
    }
}

impl From<Interrupted> for ProductError {
    fn from(interrupted: Interrupted) -> Self {
        match interrupted {
            Interrupted::Cancelled => ProductError::Cancelled,
            Interrupted::DeadlineExceeded => ProductError::DeadlineExceeded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for ProductOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductOperation::List => write!(f, "list products"),
            ProductOperation::Get => write!(f, "get product"),
            ProductOperation::Create => write!(f, "create product"),
            ProductOperation::Update => write!(f, "update product"),
            ProductOperation::Delete => write!(f, "delete product"),
        }
    }
}

/// Error returned by every product use case: the failed operation plus the
/// untouched underlying kind, so callers can still tell a missing product from
/// a refused caller or a backend failure.
#[derive(Debug, thiserror::Error)]
#[error("{operation}: {kind}")]
pub struct ProductOperationError {
    pub operation: ProductOperation,
    #[source]
    pub kind: ProductError,
}

impl ProductOperationError {
    pub fn new(operation: ProductOperation, kind: impl Into<ProductError>) -> Self {
        Self {
            operation,
            kind: kind.into(),
        }
    }

    pub fn kind(&self) -> &ProductError {
        &self.kind
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ProductError::NotFound)
    }

    pub fn permission_denied(&self) -> Option<PermissionDenied> {
        match self.kind {
            ProductError::Permission(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_backend_failure(&self) -> bool {
        matches!(&self.kind, ProductError::Repository(e) if e.is_backend_failure())
    }
}
