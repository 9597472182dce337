//! Crate-level error aggregating every Relay failure domain.

use crate::{ConfigError, InvocationError, ProviderError};

/// Error domains surfaced through the facade.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From, derive_more::Display)]
pub enum RelayErrorKind {
    /// Configuration could not be loaded or validated
    #[display("{_0}")]
    Config(ConfigError),
    /// Provider call failed outside of a retry loop
    #[display("{_0}")]
    Provider(ProviderError),
    /// Bounded retry invocation failed
    #[display("{_0}")]
    Invocation(InvocationError),
    /// Async runtime could not be started
    #[from(skip)]
    #[display("Runtime error: {_0}")]
    Runtime(String),
}

/// Top-level Relay error.
///
/// # Examples
///
/// ```
/// use relay_error::{ConfigError, ConfigErrorKind, RelayError, RelayErrorKind};
///
/// let err: RelayError = ConfigError::new(ConfigErrorKind::Load("missing".to_string())).into();
/// assert!(matches!(err.kind(), RelayErrorKind::Config(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Relay Error: {}", _0)]
pub struct RelayError(#[error(not(source))] Box<RelayErrorKind>);

impl RelayError {
    /// Create a new RelayError from a kind.
    pub fn new(kind: RelayErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RelayErrorKind {
        &self.0
    }

    /// Returns true if the underlying invocation ran out of attempts.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind(), RelayErrorKind::Invocation(err) if err.is_exhausted())
    }
}

impl<T> From<T> for RelayError
where
    T: Into<RelayErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Relay operations.
pub type RelayResult<T> = Result<T, RelayError>;
