// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recording_consumer::{BatchReceiver, DispatchedBatch};
use core::fmt::Debug;
use std::time::Duration;
use tokio::time::timeout;

/// Next recorded batch, or `None` if none arrives within `timeout_ms`.
///
/// Under a paused clock the timeout elapses in virtual time, so this also
/// lets pending flush timers fire.
pub async fn recv_batch<K, T>(
    rx: &mut BatchReceiver<K, T>,
    timeout_ms: u64,
) -> Option<DispatchedBatch<K, T>> {
    timeout(Duration::from_millis(timeout_ms), rx.recv())
        .await
        .ok()
        .flatten()
}

/// Receive exactly `count` batches, waiting at most `timeout_ms` for each.
///
/// # Panics
/// Panics if a batch is missing.
pub async fn recv_batches<K, T>(
    rx: &mut BatchReceiver<K, T>,
    count: usize,
    timeout_ms: u64,
) -> Vec<DispatchedBatch<K, T>> {
    let mut batches = Vec::with_capacity(count);
    for index in 0..count {
        match recv_batch(rx, timeout_ms).await {
            Some(batch) => batches.push(batch),
            None => panic!("expected {count} batches, timed out waiting for batch #{index}"),
        }
    }
    batches
}

/// Assert that no batch is dispatched within `timeout_ms`.
///
/// # Panics
/// Panics if a batch arrives.
pub async fn assert_no_batch<K: Debug, T: Debug>(rx: &mut BatchReceiver<K, T>, timeout_ms: u64) {
    if let Ok(Some(batch)) = timeout(Duration::from_millis(timeout_ms), rx.recv()).await {
        panic!("unexpected batch dispatched: {batch:?}");
    }
}
