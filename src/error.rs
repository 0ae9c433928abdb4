//! Unified error type.

use std::fmt;

/// The error type for secure-hello's fallible startup path.
///
/// Request-level outcomes (the 404 fall-through) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// the two ways startup can fail: an unusable `PORT` value and a socket that
/// cannot be bound.
#[derive(Debug)]
pub enum Error {
    /// `PORT` was set, non-empty, and not a valid port number.
    InvalidPort(String),
    /// The listening socket could not be bound.
    Bind(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort(value) => write!(f, "invalid PORT value `{value}`"),
            Self::Bind(e) => write!(f, "bind: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPort(_) => None,
            Self::Bind(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Bind(e)
    }
}
