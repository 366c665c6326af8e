//! Top-level error wrapper types.

use crate::{BackendError, BuilderError, ChapterError, JsonError};

/// This is the foundation error enum for the Fabula workspace.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaError, BackendError};
///
/// let backend_err = BackendError::new("Connection failed");
/// let err: FabulaError = backend_err.into();
/// assert!(format!("{}", err).contains("Backend Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulaErrorKind {
    /// Generic backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Chapter pipeline error
    #[from(ChapterError)]
    Chapter(ChapterError),
}

/// Fabula error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaResult, BuilderError, BuilderErrorKind};
///
/// fn might_fail() -> FabulaResult<()> {
///     Err(BuilderError::new(BuilderErrorKind::MissingField("action".into())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabula Error: {}", _0)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FabulaErrorKind
impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabula operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaResult, BackendError};
///
/// fn call_provider() -> FabulaResult<String> {
///     Err(BackendError::new("429 Too Many Requests"))?
/// }
/// ```
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
