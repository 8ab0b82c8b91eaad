// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Per-key debounced batching.
//!
//! Producers push items tagged with a key (device id, user id, sensor id, ...)
//! into a [`Manager`]. Each key owns an independent buffer that delivers its
//! accumulated batch to a [`Consumer`]:
//!
//! - no later than `max_wait` after the first unflushed item arrived, and
//! - no sooner than `min_interval` after the previous flush of the same key.
//!
//! A flush that would violate the minimum interval is postponed, never
//! dropped, and items arriving in the meantime join the postponed batch.
//!
//! # Example
//!
//! ```rust,no_run
//! use debounce_buffer::Manager;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> debounce_buffer::Result<()> {
//! let manager = Manager::builder()
//!     .max_wait(Duration::from_secs(2))
//!     .min_interval(Duration::from_millis(200))
//!     .consumer(|device: String, batch: Vec<u32>| {
//!         println!("{device}: {} readings", batch.len());
//!     })
//!     .build()?;
//!
//! manager.add("dev-01".to_string(), 17);
//! manager.add("dev-01".to_string(), 18);
//! manager.add("dev-02".to_string(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Limitations
//!
//! Buffers are never evicted. A producer population with unbounded key
//! cardinality grows memory without bound.

#[macro_use]
mod logging;

mod buffer;
mod config;
mod dispatch;
mod manager;
mod registry;

pub mod prelude;

pub use buffer::{BufferSnapshot, BufferStatus};
pub use config::DebounceConfig;
pub use debounce_core::{BufferKey, Consumer};
pub use debounce_error::{DebounceError, Result};
pub use manager::{Manager, ManagerBuilder};

/// Runtime used when none is named explicitly.
pub type DefaultRuntime = debounce_runtime::TokioRuntime;
