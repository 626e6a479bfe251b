use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Routes a mapped error into the matching variant of a response enum.
/// Statuses the enum does not declare end up in `InternalError`.
macro_rules! impl_from_error_response {
    ($response:ident { $($status:literal => $variant:ident),* $(,)? }) => {
        impl From<(poem::http::StatusCode, poem_openapi::payload::Json<$crate::api::error::ErrorResponse>)>
            for $response
        {
            fn from(
                (status, json): (
                    poem::http::StatusCode,
                    poem_openapi::payload::Json<$crate::api::error::ErrorResponse>,
                ),
            ) -> Self {
                match status.as_u16() {
                    $($status => $response::$variant(json),)*
                    _ => $response::InternalError(json),
                }
            }
        }
    };
}

pub(crate) use impl_from_error_response;
