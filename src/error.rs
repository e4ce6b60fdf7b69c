//! Error types for the serde bridge.
//!
//! Encoding a [`Value`](crate::Value) never fails. Errors only come up while
//! converting a Rust type into a `Value` through [`to_value`](crate::to_value),
//! where a `Serialize` implementation may report its own failure or drive the
//! serializer out of order.
//!
//! ## Examples
//!
//! ```rust
//! use serialize_as_code::Error;
//!
//! let err = Error::message("map value without a key");
//! assert_eq!(err.to_string(), "map value without a key");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors that can occur while building a value from a Rust type.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Error raised by a `Serialize` implementation
    #[error("Error: {0}")]
    Custom(String),

    /// Serializer driven against the serde call protocol
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialize_as_code::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an error carrying only the given message.
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::custom("boom").to_string(), "Error: boom");
        assert_eq!(Error::message("plain").to_string(), "plain");
    }

    #[test]
    fn test_serde_custom_constructor() {
        let err = <Error as serde::ser::Error>::custom("from serde");
        assert!(matches!(err, Error::Custom(ref m) if m == "from serde"));
    }
}
