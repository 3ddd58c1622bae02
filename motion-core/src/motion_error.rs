// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for motion stream construction.
//!
//! Dispatch itself never fails: values travel exclusively through [`Channel`](crate::Channel)s
//! and there is no error channel. Errors only surface when an operator is built
//! with a configuration it cannot honor.
//!
//! # Examples
//!
//! ```
//! use motion_core::{MotionError, Result};
//!
//! fn window_capacity(capacity: usize) -> Result<usize> {
//!     if capacity == 0 {
//!         return Err(MotionError::invalid_configuration("window capacity must be at least 1"));
//!     }
//!     Ok(capacity)
//! }
//!
//! assert!(window_capacity(0).is_err());
//! ```

/// Root error type for all motion operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    /// An operator was constructed with parameters outside its valid domain.
    ///
    /// This is a programmer error and is reported at construction time instead
    /// of being silently clamped.
    #[error("Invalid configuration: {context}")]
    InvalidConfiguration {
        /// Which parameter was rejected and why
        context: String,
    },
}

impl MotionError {
    /// Create an invalid-configuration error with the given context
    pub fn invalid_configuration(context: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            context: context.into(),
        }
    }
}

/// Specialized Result type for motion operations.
pub type Result<T> = std::result::Result<T, MotionError>;
