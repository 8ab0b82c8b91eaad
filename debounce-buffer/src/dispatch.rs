// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use debounce_core::Consumer;
use debounce_runtime::executor::Executor;
use std::sync::Arc;

/// Hands flushed batches to the consumer on the executor's blocking pool.
///
/// Fire-and-forget: the flushing buffer neither waits for the consumer nor
/// observes a panic raised inside it.
pub(crate) struct Dispatcher<K, T, E> {
    consumer: Arc<dyn Consumer<K, T>>,
    executor: E,
}

impl<K, T, E> Dispatcher<K, T, E>
where
    K: Send + 'static,
    T: Send + 'static,
    E: Executor,
{
    pub(crate) fn new(consumer: Arc<dyn Consumer<K, T>>, executor: E) -> Self {
        Self { consumer, executor }
    }

    pub(crate) fn executor(&self) -> &E {
        &self.executor
    }

    pub(crate) fn dispatch(&self, key: K, batch: Vec<T>) {
        let consumer = Arc::clone(&self.consumer);
        self.executor
            .spawn_blocking(move || consumer.consume(key, batch));
    }
}
