// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;
use std::collections::hash_map::{Entry, RandomState};
use std::collections::HashMap;
use std::sync::Arc;

/// Insert-only map split into independently locked shards.
///
/// A key always hashes to the same shard, so look-up-or-insert for one key is
/// atomic while operations on keys of other shards proceed in parallel.
/// Shard locks are held only for the map operation itself.
pub(crate) struct ShardedRegistry<K, V, S = RandomState> {
    shards: Box<[Mutex<HashMap<K, Arc<V>>>]>,
    hasher: S,
}

impl<K, V> ShardedRegistry<K, V>
where
    K: Eq + Hash,
{
    pub(crate) fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| Mutex::new(HashMap::new()))
            .collect();
        Self {
            shards,
            hasher: RandomState::new(),
        }
    }
}

impl<K, V, S> ShardedRegistry<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn shard(&self, key: &K) -> &Mutex<HashMap<K, Arc<V>>> {
        let index = (self.hasher.hash_one(key) % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    /// Value for `key`, created by `make` if absent. `make` runs at most once
    /// per key, under the shard lock.
    pub(crate) fn get_or_insert_with<F>(&self, key: K, make: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        let mut shard = self.shard(&key).lock();
        match shard.entry(key) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                let value = Arc::new(make(entry.key()));
                Arc::clone(entry.insert(value))
            }
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<Arc<V>> {
        self.shard(key).lock().get(key).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    #[cfg(test)]
    pub(crate) fn shard_count(&self) -> usize {
        self.shards.len()
    }
}
