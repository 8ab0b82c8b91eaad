// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::hash::Hash;

/// Identifier partitioning the item stream into independently scheduled
/// sub-streams (device id, user id, sensor id, ...).
///
/// Keys are opaque: they are only hashed, compared and cloned into the
/// scheduled flush of their buffer. Blanket-implemented for every type with
/// the required bounds.
///
/// # Example
///
/// ```
/// use debounce_core::BufferKey;
///
/// fn accepts_key<K: BufferKey>(_key: K) {}
///
/// accepts_key("device-01");
/// accepts_key(String::from("device-02"));
/// accepts_key(42_u64);
/// ```
pub trait BufferKey: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<K> BufferKey for K where K: Eq + Hash + Clone + Debug + Send + Sync + 'static {}
