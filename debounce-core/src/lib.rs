// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core traits and primitives shared by the debounce buffer crates.
//!
//! - [`BufferKey`] - bound every partitioning key satisfies
//! - [`Consumer`] - downstream sink receiving flushed batches
//! - [`CancellationToken`] - runtime-agnostic cancellation signal used by
//!   scheduled flush tasks

pub mod buffer_key;
pub mod cancellation_token;
pub mod consumer;

pub use self::buffer_key::BufferKey;
pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::consumer::Consumer;
