// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{executor::Executor, mutex::MutexLike, timer::Timer};
use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;
use debounce_error::Result;

pub trait Runtime: Send + Sync + 'static {
    type Mutex<T: Send>: MutexLike<T> + Send + Sync;
    type Timer: Timer<Instant = Self::Instant> + Default;
    type Instant: Copy
        + Ord
        + Send
        + Sync
        + Debug
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;
    type Executor: Executor;

    /// Executor bound to the runtime the caller is currently running in.
    ///
    /// # Errors
    /// Returns `DebounceError::RuntimeUnavailable` when called outside of one.
    fn current_executor() -> Result<Self::Executor>;
}
