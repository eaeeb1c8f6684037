use alloc::boxed::Box;

pub trait Error: core::error::Error {}

impl<T: core::error::Error> Error for T {}

/// A value that is either a success ([`Ok`](Result::Ok)) or a failure
/// ([`Error`](Result::Error)).
///
/// The failure payload is an arbitrary type. When omitted it defaults to a
/// boxed [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<V, E = Box<dyn Error>> {
    Ok(V),
    Error(E),
}

impl<V, E> Result<V, E> {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Converts into an [`Option`] holding the success value, discarding any failure.
    pub fn ok(self) -> Option<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Converts into an [`Option`] holding the failure value, discarding any success.
    pub fn error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Borrows both payloads, leaving `self` untouched.
    ///
    /// Extracting through the returned reference can be repeated as often as
    /// needed and always observes the same payload.
    #[must_use]
    pub const fn as_ref(&self) -> Result<&V, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => Result::Error(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Error(error) => Result::Error(error),
        }
    }

    pub fn map_error<G, F>(self, f: F) -> Result<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => Result::Error(f(error)),
        }
    }

    /// Calls `f` with the success value, or passes the failure through unchanged.
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(V) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Error(error) => Result::Error(error),
        }
    }

    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => f(error),
        }
    }
}

impl<V, E> From<core::result::Result<V, E>> for Result<V, E> {
    fn from(result: core::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for core::result::Result<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Result::Ok(value) => Ok(value),
            Result::Error(error) => Err(error),
        }
    }
}
