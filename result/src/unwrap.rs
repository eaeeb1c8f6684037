use core::fmt::Display;

use alloc::{format, string::String};

use crate::errors::Result;

/// Raised when an extraction finds the variant it did not expect.
///
/// The mismatching operation panics with the failure's message, so a panic
/// hook or a surrounding `catch_unwind` observes exactly [`UnwrapFailure::message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UnwrapFailure {
    message: String,
}

impl UnwrapFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[track_caller]
    fn raise(self) -> ! {
        #[cfg(feature = "log")]
        log::error!("{self}");

        panic!("{self}")
    }
}

impl<V, E> Result<V, E> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapFailure`] if `self` is an [`Error`](Result::Error).
    /// The message contains the failure payload.
    #[track_caller]
    pub fn unwrap(self) -> V
    where
        E: Display,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => {
                UnwrapFailure::new(format!("called Result::unwrap on an Error value: {error}"))
                    .raise()
            }
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapFailure`] if `self` is an [`Error`](Result::Error).
    /// The message is `message` followed by the failure payload.
    #[track_caller]
    pub fn expect(self, message: &str) -> V
    where
        E: Display,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => UnwrapFailure::new(format!("{message}: {error}")).raise(),
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapFailure`] if `self` is [`Ok`](Result::Ok).
    /// The message contains the success payload.
    #[track_caller]
    pub fn unwrap_error(self) -> E
    where
        V: Display,
    {
        match self {
            Self::Ok(value) => {
                UnwrapFailure::new(format!("called Result::unwrap_error on an Ok value: {value}"))
                    .raise()
            }
            Self::Error(error) => error,
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapFailure`] if `self` is [`Ok`](Result::Ok).
    /// The message is `message` followed by the success payload.
    #[track_caller]
    pub fn expect_error(self, message: &str) -> E
    where
        V: Display,
    {
        match self {
            Self::Ok(value) => UnwrapFailure::new(format!("{message}: {value}")).raise(),
            Self::Error(error) => error,
        }
    }
}
