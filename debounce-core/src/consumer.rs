// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Downstream sink receiving every flushed batch.
///
/// `consume` runs on its own execution context, never on the thread that
/// completed the flush. It receives ownership of the batch. Whatever it does
/// with the batch (including panicking) is not observed by the buffer.
///
/// Any `Fn(K, Vec<T>)` closure that is `Send + Sync + 'static` is a consumer.
///
/// # Example
///
/// ```
/// use debounce_core::Consumer;
///
/// let print = |key: &'static str, batch: Vec<u32>| {
///     println!("{key}: {} items", batch.len());
/// };
///
/// print.consume("sensor-7", vec![1, 2, 3]);
/// ```
pub trait Consumer<K, T>: Send + Sync + 'static {
    /// Handle one batch flushed for `key`, items in arrival order.
    fn consume(&self, key: K, batch: Vec<T>);
}

impl<K, T, F> Consumer<K, T> for F
where
    F: Fn(K, Vec<T>) + Send + Sync + 'static,
{
    fn consume(&self, key: K, batch: Vec<T>) {
        self(key, batch);
    }
}
