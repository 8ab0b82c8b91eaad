// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the keyed debounce buffer
//!
//! Producing items never fails: `Manager::add` has no error path. Errors only
//! surface while a manager is being assembled, when its configuration or the
//! runtime it is bound to cannot be used.
//!
//! # Examples
//!
//! ```
//! use debounce_error::{DebounceError, Result};
//!
//! fn validate_shards(shards: usize) -> Result<usize> {
//!     if shards == 0 {
//!         return Err(DebounceError::invalid_config("shard_count must be > 0"));
//!     }
//!     Ok(shards)
//! }
//!
//! assert!(validate_shards(0).is_err());
//! ```

/// Root error type for all debounce buffer operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DebounceError {
    /// A configuration value is out of range
    #[error("Invalid configuration: {context}")]
    InvalidConfig {
        /// Which value was rejected and why
        context: String,
    },

    /// The builder was finished without a consumer
    ///
    /// Every flushed batch needs somewhere to go, so a manager cannot be
    /// built without one.
    #[error("No consumer configured")]
    MissingConsumer,

    /// No executor was supplied and none could be discovered
    ///
    /// Raised when the builder falls back to the ambient Tokio runtime but is
    /// called outside of one.
    #[error("Runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// Details reported by the runtime lookup
        context: String,
    },
}

impl DebounceError {
    /// Create an invalid configuration error with the given context
    pub fn invalid_config(context: impl Into<String>) -> Self {
        Self::InvalidConfig {
            context: context.into(),
        }
    }

    /// Create a runtime unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }

    /// Check if retrying the same call could succeed
    ///
    /// Only a missing runtime is transient: the same builder may succeed once
    /// it is invoked from inside a runtime.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::RuntimeUnavailable { .. })
    }
}

/// Specialized Result type for debounce buffer operations
pub type Result<T> = core::result::Result<T, DebounceError>;
