// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use debounce_core::Consumer;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// One batch as the consumer saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedBatch<K, T> {
    pub key: K,
    pub items: Vec<T>,
    /// Tokio clock reading when the consumer ran.
    pub at: Instant,
}

pub type BatchReceiver<K, T> = mpsc::UnboundedReceiver<DispatchedBatch<K, T>>;

/// Consumer that records every batch into an unbounded channel.
#[derive(Debug)]
pub struct RecordingConsumer<K, T> {
    tx: mpsc::UnboundedSender<DispatchedBatch<K, T>>,
}

impl<K, T> RecordingConsumer<K, T> {
    #[must_use]
    pub fn new() -> (Self, BatchReceiver<K, T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl<K, T> Consumer<K, T> for RecordingConsumer<K, T>
where
    K: Send + 'static,
    T: Send + 'static,
{
    fn consume(&self, key: K, batch: Vec<T>) {
        // The receiving test may already be done; late batches are irrelevant.
        let _ = self.tx.send(DispatchedBatch {
            key,
            items: batch,
            at: Instant::now(),
        });
    }
}
