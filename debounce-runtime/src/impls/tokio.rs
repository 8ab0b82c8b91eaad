// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::{future::Future, time::Duration};

#[cfg(feature = "runtime-tokio")]
use crate::{executor::Executor, runtime::Runtime, timer::Timer};

#[cfg(feature = "runtime-tokio")]
use debounce_error::{DebounceError, Result};

#[cfg(feature = "runtime-tokio")]
#[derive(Debug)]
pub struct TokioRuntime;

#[cfg(feature = "runtime-tokio")]
impl Runtime for TokioRuntime {
    type Mutex<T: Send> = parking_lot::Mutex<T>;
    type Timer = TokioTimer;
    type Instant = tokio::time::Instant;
    type Executor = TokioExecutor;

    fn current_executor() -> Result<Self::Executor> {
        TokioExecutor::current()
    }
}

/// Tokio clock and sleeps.
///
/// Uses `tokio::time::Instant` rather than `std::time::Instant` so that
/// paused test clocks (`tokio::time::pause`) drive both the sleeps and the
/// minimum-interval arithmetic.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

/// Spawns onto a specific Tokio runtime through its `Handle`, so producers on
/// plain OS threads can still schedule flushes.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug)]
pub struct TokioExecutor {
    handle: tokio::runtime::Handle,
}

#[cfg(feature = "runtime-tokio")]
impl TokioExecutor {
    /// Bind to the runtime the caller is running in.
    ///
    /// # Errors
    /// Returns `DebounceError::RuntimeUnavailable` outside of a Tokio runtime.
    pub fn current() -> Result<Self> {
        tokio::runtime::Handle::try_current()
            .map(Self::from_handle)
            .map_err(|e| DebounceError::runtime_unavailable(e.to_string()))
    }

    #[must_use]
    pub const fn from_handle(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    #[must_use]
    pub const fn handle(&self) -> &tokio::runtime::Handle {
        &self.handle
    }
}

#[cfg(feature = "runtime-tokio")]
impl Executor for TokioExecutor {
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        drop(self.handle.spawn(future));
    }

    fn spawn_blocking<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        drop(self.handle.spawn_blocking(f));
    }
}
