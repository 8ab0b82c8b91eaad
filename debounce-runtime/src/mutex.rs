// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::ops::{Deref, DerefMut};

/// Shared lock guarding one buffer's pending items and flush handle.
///
/// Owned inline by its buffer, which is itself shared behind an `Arc`.
/// Implementations must not poison: a panic while the lock is held leaves the
/// protected state usable.
pub trait MutexLike<T: ?Sized> {
    type Guard<'a>: Deref<Target = T> + DerefMut
    where
        Self: 'a,
        T: 'a;

    fn new(value: T) -> Self
    where
        T: Sized;

    /// Blocks the calling thread until the lock is acquired.
    fn lock(&self) -> Self::Guard<'_>;
}
