// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the keyed debounce buffer.
//!
//! The buffer never talks to an async runtime directly. It goes through:
//!
//! - [`Timer`](timer::Timer) - clock and sleep futures
//! - [`Executor`](executor::Executor) - detached task and blocking-work spawning
//! - [`MutexLike`](mutex::MutexLike) - the lock guarding each buffer
//! - [`Runtime`](runtime::Runtime) - ties the three together
//!
//! [`ScheduledTask`] builds the deferred flush action on top of them.

pub mod executor;
pub mod impls;
pub mod mutex;
pub mod runtime;
pub mod scheduled_task;
pub mod timer;

pub use scheduled_task::ScheduledTask;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::{TokioExecutor, TokioRuntime, TokioTimer};
