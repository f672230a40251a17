// Copyright (c) 2025 Quill Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the probe hash table.

/// Error types for probe hash table operations
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ProbeHashTableError {
    /// Construction parameters are out of range
    #[error("Invalid table configuration: {0}")]
    InvalidConfiguration(String),

    /// Delete was called on a key that is absent or already deleted
    #[error("Key not found: {0:?}")]
    KeyNotFound(String),
}

/// Result type for probe hash table operations
pub type Result<T> = std::result::Result<T, ProbeHashTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProbeHashTableError::KeyNotFound("ab".to_string());
        assert_eq!(err.to_string(), "Key not found: \"ab\"");

        let err = ProbeHashTableError::InvalidConfiguration("capacity must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid table configuration: capacity must be at least 1"
        );
    }
}
