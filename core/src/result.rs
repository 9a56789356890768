//! Two-variant outcome returned by every remote operation.

use crate::http::HttpErrorResponse;

/// Outcome of one remote operation: either the typed value or the error
/// envelope the server (or transport) produced.
///
/// Accessing the payload of the wrong variant through [`ApiResult::value`] or
/// [`ApiResult::error`] is API misuse and panics. Use the `into_*` methods or
/// a `match` when the variant is not known in advance.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<V, E = HttpErrorResponse> {
    Success(V),
    Error(E),
}

impl<V, E> ApiResult<V, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResult::Error(_))
    }

    /// Borrow the success value.
    ///
    /// # Panics
    /// Panics if this is an `Error`.
    #[track_caller]
    pub fn value(&self) -> &V {
        match self {
            ApiResult::Success(value) => value,
            ApiResult::Error(_) => panic!("called `ApiResult::value()` on an `Error` value"),
        }
    }

    /// Borrow the error payload.
    ///
    /// # Panics
    /// Panics if this is a `Success`.
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            ApiResult::Error(error) => error,
            ApiResult::Success(_) => panic!("called `ApiResult::error()` on a `Success` value"),
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            ApiResult::Success(value) => Some(value),
            ApiResult::Error(_) => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            ApiResult::Error(error) => Some(error),
            ApiResult::Success(_) => None,
        }
    }

    pub fn into_result(self) -> Result<V, E> {
        match self {
            ApiResult::Success(value) => Ok(value),
            ApiResult::Error(error) => Err(error),
        }
    }

    pub fn map<U, F: FnOnce(V) -> U>(self, f: F) -> ApiResult<U, E> {
        match self {
            ApiResult::Success(value) => ApiResult::Success(f(value)),
            ApiResult::Error(error) => ApiResult::Error(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for ApiResult<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => ApiResult::Success(value),
            Err(error) => ApiResult::Error(error),
        }
    }
}
