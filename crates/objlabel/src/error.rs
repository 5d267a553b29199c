// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for label formatting.

use thiserror::Error;

/// Result type for label operations.
pub type Result<T> = std::result::Result<T, LabelError>;

/// Label formatting errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The caller passed an absent reference.
    #[error("invalid argument: absent {type_name} reference")]
    InvalidArgument {
        /// Static type name of the requested value.
        type_name: &'static str,
    },
}

impl LabelError {
    /// Build the error for an absent `T` reference.
    pub fn absent<T: ?Sized>() -> Self {
        Self::InvalidArgument {
            type_name: std::any::type_name::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_names_requested_type() {
        let err = LabelError::absent::<u32>();
        assert_eq!(err, LabelError::InvalidArgument { type_name: "u32" });
        assert_eq!(err.to_string(), "invalid argument: absent u32 reference");
    }
}
