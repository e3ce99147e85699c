//! Error types for monet-core.
//!
//! The color math in Monet is total: every conversion returns a color.
//! The only fallible step at this level is turning user text into a color.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by core color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The string is not a `#RRGGBB` color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monet_core::{Argb, Error};
    ///
    /// let err = "#12345".parse::<Argb>().unwrap_err();
    /// assert!(matches!(err, Error::InvalidHex { .. }));
    /// assert!(err.to_string().contains("#12345"));
    /// ```
    #[error("invalid hex color '{input}': expected #RRGGBB")]
    InvalidHex {
        /// The rejected input, verbatim.
        input: String,
    },
}
