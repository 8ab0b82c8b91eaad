// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the debounce buffer workspace.
//!
//! Designed for development and testing only.
//!
//! # Key Types
//!
//! - [`RecordingConsumer`] - consumer forwarding each dispatched batch, stamped
//!   with the (possibly paused) Tokio clock, into a channel
//! - [`DispatchedBatch`] - one recorded dispatch
//! - [`helpers`] - receive/assert helpers built on `tokio::time::timeout`
//! - [`readings`] - sensor reading fixtures
//!
//! # Example
//!
//! ```rust
//! use debounce_core::Consumer;
//! use debounce_test_utils::{helpers::recv_batch, RecordingConsumer};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (consumer, mut batches) = RecordingConsumer::<&'static str, u8>::new();
//! consumer.consume("k", vec![1, 2]);
//!
//! let batch = recv_batch(&mut batches, 10).await.unwrap();
//! assert_eq!(batch.items, vec![1, 2]);
//! # }
//! ```

pub mod helpers;
pub mod readings;
pub mod recording_consumer;

pub use helpers::{assert_no_batch, recv_batch, recv_batches};
pub use readings::SensorReading;
pub use recording_consumer::{BatchReceiver, DispatchedBatch, RecordingConsumer};
