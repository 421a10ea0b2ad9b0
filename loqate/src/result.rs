//! The outcome of a Loqate operation.
//!
//! Every gateway operation returns an [`ApiResult`]: either the mapped
//! records or the error the service reported. Business failures are values,
//! not `Err`s; [`unwrap_or_raise`] is the single place where a failure is
//! turned into an error for `?` propagation.

use crate::error::RemoteError;

/// Success or failure of a remote operation.
///
/// An `ApiResult` is built once from a complete response and never changes
/// afterwards.
///
/// ## Examples
///
/// ```rust
/// use loqate::{ApiResult, RemoteError};
///
/// let ok: ApiResult<u32> = ApiResult::success(7);
/// assert!(ok.is_success());
/// assert_eq!(ok.value(), Some(&7));
///
/// let err: ApiResult<u32> = ApiResult::failure(RemoteError::new(1001, "Start Required", "c", "r"));
/// assert!(err.is_failure());
/// assert_eq!(err.error().map(|e| e.id), Some(1001));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T, E = RemoteError> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed.
    Failure {
        /// What went wrong.
        error: E,
        /// Optional tag describing the kind of failure.
        code: Option<String>,
    },
}

impl<T, E> ApiResult<T, E> {
    /// Wraps the value of a successful operation.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps the error of a failed operation.
    pub fn failure(error: E) -> Self {
        Self::Failure { error, code: None }
    }

    /// Wraps the error of a failed operation together with a tag.
    pub fn failure_with_code(error: E, code: impl Into<String>) -> Self {
        Self::Failure {
            error,
            code: Some(code.into()),
        }
    }

    /// Returns `true` for [`ApiResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`ApiResult::Failure`].
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// The failure value, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// The failure tag, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { code, .. } => code.as_deref(),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> ApiResult<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ApiResult::Success(f(value)),
            Self::Failure { error, code } => ApiResult::Failure { error, code },
        }
    }

    /// Converts into a standard [`Result`], dropping the failure tag.
    pub fn into_result(self) -> Result<T, E> {
        unwrap_or_raise(self)
    }
}

impl<T, E> From<ApiResult<T, E>> for Result<T, E> {
    fn from(result: ApiResult<T, E>) -> Self {
        result.into_result()
    }
}

/// Unwraps a result, returning the success value or raising the failure's
/// error.
///
/// This is the only point where a business failure becomes an `Err`.
///
/// ## Examples
///
/// ```rust
/// use loqate::{unwrap_or_raise, ApiResult, RemoteError};
///
/// let failed: ApiResult<()> = ApiResult::failure(RemoteError::new(2, "X", "c", "r"));
/// let err = unwrap_or_raise(failed).unwrap_err();
/// assert_eq!(err.to_string(), "X");
/// ```
pub fn unwrap_or_raise<T, E>(result: ApiResult<T, E>) -> Result<T, E> {
    match result {
        ApiResult::Success(value) => Ok(value),
        ApiResult::Failure { error, .. } => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: i64, description: &str) -> RemoteError {
        RemoteError::new(id, description, "cause", "resolution")
    }

    #[test]
    fn success_exposes_value_only() {
        let result: ApiResult<&str> = ApiResult::success("value");
        assert!(result.is_success());
        assert!(!result.is_failure());
        assert_eq!(result.value(), Some(&"value"));
        assert!(result.error().is_none());
        assert!(result.code().is_none());
    }

    #[test]
    fn failure_exposes_error_and_code() {
        let result: ApiResult<()> = ApiResult::failure_with_code(remote(1001, "Start Required"), "not_found");
        assert!(result.is_failure());
        assert!(result.value().is_none());
        assert_eq!(result.error().map(|e| e.description.as_str()), Some("Start Required"));
        assert_eq!(result.code(), Some("not_found"));
    }

    #[test]
    fn failure_without_code() {
        let result: ApiResult<()> = ApiResult::failure(remote(1, "X"));
        assert_eq!(result.code(), None);
    }

    #[test]
    fn unwrap_or_raise_returns_success_value() {
        let result: ApiResult<u32> = ApiResult::success(42);
        assert_eq!(unwrap_or_raise(result).unwrap(), 42);
    }

    #[test]
    fn unwrap_or_raise_raises_failure_error() {
        let result: ApiResult<u32> = ApiResult::failure(remote(7, "X"));
        let err = unwrap_or_raise(result).unwrap_err();
        assert_eq!(err.to_string(), "X");
        assert_eq!(err.id, 7);
    }

    #[test]
    fn map_transforms_success_only() {
        let ok: ApiResult<u32> = ApiResult::success(2);
        assert_eq!(ok.map(|v| v * 10).value(), Some(&20));

        let failed: ApiResult<u32> = ApiResult::failure_with_code(remote(3, "Y"), "tag");
        let mapped = failed.map(|v| v * 10);
        assert_eq!(mapped.code(), Some("tag"));
        assert_eq!(mapped.error().map(|e| e.id), Some(3));
    }

    #[test]
    fn converts_into_std_result() {
        let ok: Result<u32, RemoteError> = ApiResult::success(1).into();
        assert_eq!(ok.unwrap(), 1);

        let err: Result<u32, RemoteError> = ApiResult::<u32>::failure(remote(9, "Z")).into();
        assert_eq!(err.unwrap_err().id, 9);
    }
}
