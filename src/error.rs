//! Error types for store and carousel operations.
//!
//! Read paths never surface these: a failed read degrades to "no overrides".
//! Only writes and programming errors (bad carousel input) are reported.

use thiserror::Error;

/// Errors that can occur when persisting image overrides.
#[derive(Error, Debug)]
pub enum StoreError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error from a file-backed store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage backend refused the operation (localStorage disabled, quota, ...)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StoreError {
    /// Create a storage error from any displayable message.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

/// Invalid carousel construction or navigation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one item
    #[error("Carousel must contain at least one item")]
    Empty,

    /// Navigation target outside the item list
    #[error("Carousel index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of items in the carousel
        len: usize,
    },
}

/// Result type for override store writes.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::storage("localStorage not available");
        assert_eq!(err.to_string(), "Storage error: localStorage not available");

        let err = CarouselError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(err.to_string(), "Carousel index 7 out of range for 5 items");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
