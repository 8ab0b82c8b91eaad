// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use debounce_error::DebounceError;
use debounce_runtime::executor::Executor;
use debounce_runtime::runtime::Runtime;
use debounce_runtime::{TokioExecutor, TokioRuntime};
use std::time::Duration;
use tokio::sync::oneshot;

#[test]
fn test_current_outside_runtime_fails() {
    let err = TokioExecutor::current().unwrap_err();
    assert!(matches!(err, DebounceError::RuntimeUnavailable { .. }));
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_current_executor_inside_runtime() {
    assert!(TokioRuntime::current_executor().is_ok());
}

#[tokio::test]
async fn test_spawn_runs_future() -> anyhow::Result<()> {
    let executor = TokioExecutor::current()?;
    let (tx, rx) = oneshot::channel();

    executor.spawn(async move {
        let _ = tx.send(7);
    });

    assert_eq!(tokio::time::timeout(Duration::from_secs(1), rx).await??, 7);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_spawn_blocking_runs_off_worker() -> anyhow::Result<()> {
    let executor = TokioExecutor::current()?;
    let (tx, rx) = oneshot::channel();

    executor.spawn_blocking(move || {
        std::thread::sleep(Duration::from_millis(20));
        let _ = tx.send(std::thread::current().id());
    });

    let blocking_thread = tokio::time::timeout(Duration::from_secs(2), rx).await??;
    assert_ne!(blocking_thread, std::thread::current().id());
    Ok(())
}
