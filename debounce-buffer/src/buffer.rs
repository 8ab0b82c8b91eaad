// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-key buffer state machine.
//!
//! A buffer is either **Idle** (nothing armed) or **Scheduled** (exactly one
//! deferred flush armed, at least one pending item). `append` moves Idle to
//! Scheduled; a fired flush either returns to Idle by dispatching the batch or
//! stays Scheduled by re-arming for the remainder of the minimum interval.

use crate::config::DebounceConfig;
use crate::dispatch::Dispatcher;
use core::mem;
use core::time::Duration;
use debounce_core::BufferKey;
use debounce_runtime::mutex::MutexLike;
use debounce_runtime::runtime::Runtime;
use debounce_runtime::timer::Timer;
use debounce_runtime::ScheduledTask;
use std::sync::Arc;

/// Whether a flush is currently armed for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferStatus {
    Idle,
    Scheduled,
}

/// Point-in-time view of one key's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferSnapshot<I> {
    /// Items waiting for the next flush.
    pub pending: usize,
    pub status: BufferStatus,
    /// Instant of the last successful flush, `None` before the first one.
    pub last_flush: Option<I>,
    /// Number of successful flushes so far.
    pub flush_count: u64,
}

/// Everything a buffer needs besides its own state, shared by all buffers of
/// one manager.
pub(crate) struct BufferContext<K, T, R: Runtime> {
    pub(crate) config: DebounceConfig,
    pub(crate) timer: R::Timer,
    pub(crate) dispatcher: Dispatcher<K, T, R::Executor>,
}

struct BufferState<T, I> {
    items: Vec<T>,
    // `Some` exactly while Scheduled; replacing it cancels the previous task.
    flush: Option<ScheduledTask>,
    last_flush: Option<I>,
    flush_count: u64,
}

pub(crate) struct Buffer<K, T: Send, R: Runtime> {
    key: K,
    state: R::Mutex<BufferState<T, R::Instant>>,
    context: Arc<BufferContext<K, T, R>>,
}

impl<K, T, R> Buffer<K, T, R>
where
    K: BufferKey,
    T: Send + 'static,
    R: Runtime,
{
    pub(crate) fn new(key: K, context: Arc<BufferContext<K, T, R>>) -> Self {
        debug!(key = ?key, "buffer created");
        Self {
            key,
            state: MutexLike::new(BufferState {
                items: Vec::new(),
                flush: None,
                last_flush: None,
                flush_count: 0,
            }),
            context,
        }
    }

    /// Queue `item`; arm a flush after `max_wait` if none is armed.
    pub(crate) fn append(self: &Arc<Self>, item: T) {
        let mut state = self.state.lock();
        state.items.push(item);
        trace!(key = ?self.key, pending = state.items.len(), "item appended");

        if state.flush.is_none() {
            let max_wait = self.context.config.max_wait;
            state.flush = Some(self.arm(max_wait));
        }
    }

    /// Entry point of a fired deferred flush.
    pub(crate) fn attempt_flush(self: &Arc<Self>) {
        let mut state = self.state.lock();
        let now = self.context.timer.now();

        if let Some(last_flush) = state.last_flush {
            let elapsed = now - last_flush;
            let min_interval = self.context.config.min_interval;
            if elapsed < min_interval {
                let remaining = min_interval - elapsed;
                debug!(key = ?self.key, remaining = ?remaining, "flush deferred by minimum interval");
                state.flush = Some(self.arm(remaining));
                return;
            }
        }

        state.flush = None;
        if state.items.is_empty() {
            warn!(key = ?self.key, "flush fired with no pending items");
            return;
        }

        let batch = mem::take(&mut state.items);
        state.last_flush = Some(now);
        state.flush_count += 1;
        let flush_count = state.flush_count;
        drop(state);

        debug!(key = ?self.key, size = batch.len(), flush = flush_count, "batch dispatched");
        self.context.dispatcher.dispatch(self.key.clone(), batch);
    }

    pub(crate) fn snapshot(&self) -> BufferSnapshot<R::Instant> {
        let state = self.state.lock();
        BufferSnapshot {
            pending: state.items.len(),
            status: if state.flush.is_some() {
                BufferStatus::Scheduled
            } else {
                BufferStatus::Idle
            },
            last_flush: state.last_flush,
            flush_count: state.flush_count,
        }
    }

    fn arm(self: &Arc<Self>, delay: Duration) -> ScheduledTask {
        debug!(key = ?self.key, delay = ?delay, "flush armed");
        let buffer = Arc::clone(self);
        ScheduledTask::after(
            self.context.dispatcher.executor(),
            &self.context.timer,
            delay,
            move || buffer.attempt_flush(),
        )
    }
}
