// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::buffer::{Buffer, BufferContext, BufferSnapshot};
use crate::config::DebounceConfig;
use crate::dispatch::Dispatcher;
use crate::registry::ShardedRegistry;
use crate::DefaultRuntime;
use core::fmt;
use core::marker::PhantomData;
use core::time::Duration;
use debounce_core::{BufferKey, Consumer};
use debounce_error::{DebounceError, Result};
use debounce_runtime::runtime::Runtime;
use std::sync::Arc;

/// Registry of per-key buffers and the single entry point for producers.
///
/// Cloning is cheap and every clone feeds the same buffers, so a manager can
/// be handed to any number of producer threads or tasks.
///
/// Buffers are created on the first [`add`](Self::add) for a key and live as
/// long as the manager (or an armed flush) references them.
pub struct Manager<K, T, R = DefaultRuntime>
where
    K: BufferKey,
    T: Send + 'static,
    R: Runtime,
{
    inner: Arc<Inner<K, T, R>>,
}

struct Inner<K, T, R>
where
    K: BufferKey,
    T: Send + 'static,
    R: Runtime,
{
    buffers: ShardedRegistry<K, Buffer<K, T, R>>,
    context: Arc<BufferContext<K, T, R>>,
}

impl<K, T> Manager<K, T>
where
    K: BufferKey,
    T: Send + 'static,
{
    /// Start configuring a manager on the default runtime.
    #[must_use]
    pub fn builder() -> ManagerBuilder<K, T> {
        ManagerBuilder::new()
    }
}

impl<K, T, R> Manager<K, T, R>
where
    K: BufferKey,
    T: Send + 'static,
    R: Runtime,
{
    /// Queue `item` for `key`.
    ///
    /// Never blocks beyond two short critical sections (the key's registry
    /// shard, then the key's own buffer) and never fails. The first item of an
    /// unflushed run arms a flush `max_wait` in the future; later items join
    /// that run.
    pub fn add(&self, key: K, item: T) {
        let context = &self.inner.context;
        let buffer = self
            .inner
            .buffers
            .get_or_insert_with(key, |key| Buffer::new(key.clone(), Arc::clone(context)));
        buffer.append(item);
    }

    /// Number of keys seen so far.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.inner.buffers.len()
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.buffers.get(key).is_some()
    }

    /// Current state of `key`'s buffer, `None` if the key was never added.
    #[must_use]
    pub fn snapshot(&self, key: &K) -> Option<BufferSnapshot<R::Instant>> {
        self.inner.buffers.get(key).map(|buffer| buffer.snapshot())
    }

    #[must_use]
    pub fn config(&self) -> &DebounceConfig {
        &self.inner.context.config
    }
}

impl<K, T, R> Clone for Manager<K, T, R>
where
    K: BufferKey,
    T: Send + 'static,
    R: Runtime,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, T, R> fmt::Debug for Manager<K, T, R>
where
    K: BufferKey,
    T: Send + 'static,
    R: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("config", self.config())
            .field("keys", &self.key_count())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Manager`].
///
/// Only the consumer is mandatory; timings default to
/// [`DebounceConfig::default`]. Without an explicit executor, `build` binds
/// to the runtime it is called from.
///
/// # Example
///
/// ```rust
/// use debounce_buffer::{DebounceError, ManagerBuilder};
///
/// let missing = ManagerBuilder::<&'static str, u8>::new().build();
/// assert!(matches!(missing, Err(DebounceError::MissingConsumer)));
/// ```
pub struct ManagerBuilder<K, T, R = DefaultRuntime>
where
    R: Runtime,
{
    config: DebounceConfig,
    consumer: Option<Arc<dyn Consumer<K, T>>>,
    executor: Option<R::Executor>,
    _runtime: PhantomData<R>,
}

impl<K, T, R> ManagerBuilder<K, T, R>
where
    K: BufferKey,
    T: Send + 'static,
    R: Runtime,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: DebounceConfig::default(),
            consumer: None,
            executor: None,
            _runtime: PhantomData,
        }
    }

    /// Replace every timing and sizing parameter at once.
    #[must_use]
    pub fn config(mut self, config: DebounceConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn max_wait(mut self, max_wait: Duration) -> Self {
        self.config.max_wait = max_wait;
        self
    }

    #[must_use]
    pub fn min_interval(mut self, min_interval: Duration) -> Self {
        self.config.min_interval = min_interval;
        self
    }

    #[must_use]
    pub fn shard_count(mut self, shard_count: usize) -> Self {
        self.config.shard_count = shard_count;
        self
    }

    #[must_use]
    pub fn consumer<C>(mut self, consumer: C) -> Self
    where
        C: Consumer<K, T>,
    {
        self.consumer = Some(Arc::new(consumer));
        self
    }

    /// Spawn flushes and consumer calls on `executor` instead of the ambient
    /// runtime.
    #[must_use]
    pub fn executor(mut self, executor: R::Executor) -> Self {
        self.executor = Some(executor);
        self
    }

    /// # Errors
    /// - `DebounceError::InvalidConfig` if the configuration fails validation
    /// - `DebounceError::MissingConsumer` if no consumer was set
    /// - `DebounceError::RuntimeUnavailable` if no executor was set and the
    ///   caller is not inside a runtime
    pub fn build(self) -> Result<Manager<K, T, R>> {
        self.config.validate()?;
        let consumer = self.consumer.ok_or(DebounceError::MissingConsumer)?;
        let executor = match self.executor {
            Some(executor) => executor,
            None => R::current_executor()?,
        };

        let context = Arc::new(BufferContext {
            config: self.config,
            timer: R::Timer::default(),
            dispatcher: Dispatcher::new(consumer, executor),
        });

        Ok(Manager {
            inner: Arc::new(Inner {
                buffers: ShardedRegistry::new(self.config.shard_count),
                context,
            }),
        })
    }
}

impl<K, T, R> Default for ManagerBuilder<K, T, R>
where
    K: BufferKey,
    T: Send + 'static,
    R: Runtime,
{
    fn default() -> Self {
        Self::new()
    }
}
