// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred one-shot actions with cancel-on-drop handles.

use crate::executor::Executor;
use crate::timer::Timer;
use core::pin::pin;
use core::time::Duration;
use debounce_core::CancellationToken;
use futures::future::{select, Either};

/// Handle to an action that runs once after a delay.
///
/// The action runs on the executor, never on the thread that armed it.
/// Dropping or cancelling the handle before the delay elapses prevents it
/// from running; after it has started, cancellation has no effect.
///
/// Replacing a stored handle with a freshly armed one therefore guarantees
/// at most one pending action per owner.
///
/// # Example
///
/// ```rust
/// use debounce_runtime::{ScheduledTask, TokioExecutor, TokioTimer};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let executor = TokioExecutor::current().unwrap();
/// let task = ScheduledTask::after(&executor, &TokioTimer, Duration::from_millis(5), || {
///     println!("fired");
/// });
///
/// // Dropped before the delay elapses: never fires.
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
pub struct ScheduledTask {
    cancel: CancellationToken,
    delay: Duration,
}

impl ScheduledTask {
    /// Arm `action` to run once `delay` has elapsed, counted from this call
    /// rather than from when the executor first polls the task.
    pub fn after<E, TM, F>(executor: &E, timer: &TM, delay: Duration, action: F) -> Self
    where
        E: Executor,
        TM: Timer,
        F: FnOnce() + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let timer = timer.clone();
        let deadline = timer.now() + delay;

        executor.spawn(async move {
            // The deadline is fixed at arming time; the sleep itself is
            // created inside the task so the arming thread needs no runtime
            // context.
            let now = timer.now();
            let remaining = if deadline > now {
                deadline - now
            } else {
                Duration::ZERO
            };
            let sleep = pin!(timer.sleep_future(remaining));
            let cancelled = pin!(token.cancelled());

            if let Either::Left(((), _)) = select(sleep, cancelled).await {
                if !token.is_cancelled() {
                    action();
                }
            }
        });

        Self { cancel, delay }
    }

    /// Prevent the action from running if it has not started yet.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Delay this task was armed with.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
