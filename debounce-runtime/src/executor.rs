// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;

/// Handle used to push work onto a runtime from any thread.
///
/// Both methods detach: the caller never joins the spawned work and never
/// sees its outcome.
pub trait Executor: Clone + Send + Sync + Debug + 'static {
    /// Run `future` as an independent task.
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static;

    /// Run `f` where it may block without stalling async tasks.
    fn spawn_blocking<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static;
}
