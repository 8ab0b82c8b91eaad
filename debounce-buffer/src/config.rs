// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use debounce_error::{DebounceError, Result};

/// Timing and sizing parameters shared by every buffer of a manager.
///
/// Immutable once the manager is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// Delay between the first unflushed item of a key and its flush attempt.
    pub max_wait: Duration,
    /// Minimum gap between two successful flushes of the same key.
    pub min_interval: Duration,
    /// Number of independently locked registry shards.
    pub shard_count: usize,
}

impl DebounceConfig {
    pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(2);
    pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(200);
    pub const DEFAULT_SHARD_COUNT: usize = 16;

    #[must_use]
    pub const fn new(max_wait: Duration, min_interval: Duration) -> Self {
        Self {
            max_wait,
            min_interval,
            shard_count: Self::DEFAULT_SHARD_COUNT,
        }
    }

    #[must_use]
    pub const fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    #[must_use]
    pub const fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    #[must_use]
    pub const fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.shard_count = shard_count;
        self
    }

    /// Check that the configuration can back a manager.
    ///
    /// Any pair of durations is accepted, zero included: a zero `max_wait`
    /// flushes on the next timer tick, a zero `min_interval` disables rate
    /// limiting.
    ///
    /// # Errors
    /// Returns `DebounceError::InvalidConfig` when `shard_count` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 {
            return Err(DebounceError::invalid_config(
                "shard_count must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_WAIT, Self::DEFAULT_MIN_INTERVAL)
    }
}
