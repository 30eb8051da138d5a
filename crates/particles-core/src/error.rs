//! Error type shared by the generator and the motion policy.

use thiserror::Error;

/// Errors raised by `particles-core`.
///
/// Every failure is a rejected call: nothing in this crate does I/O, so there
/// is no partial output and nothing to retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidParameter(msg.into())
    }
}

/// Result alias for `particles-core` operations.
pub type Result<T> = std::result::Result<T, Error>;
