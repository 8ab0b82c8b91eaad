// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use debounce_buffer::Manager;
use debounce_test_utils::readings::{doorbell, thermostat};
use debounce_test_utils::{assert_no_batch, recv_batch, RecordingConsumer, SensorReading};
use std::time::Duration;
use tokio::time::{sleep, sleep_until, Instant};

#[tokio::test(start_paused = true)]
async fn test_flush_after_max_wait_with_items_in_order() -> anyhow::Result<()> {
    // Arrange
    let (consumer, mut batches) = RecordingConsumer::new();
    let manager = Manager::builder()
        .max_wait(Duration::from_secs(2))
        .min_interval(Duration::from_millis(200))
        .consumer(consumer)
        .build()?;
    let start = Instant::now();

    // Act
    manager.add("d1", "A");
    sleep(Duration::from_millis(100)).await;
    manager.add("d1", "B");

    // Assert
    assert_no_batch(&mut batches, 1800).await;

    let batch = recv_batch(&mut batches, 500).await.expect("flush at max wait");
    assert_eq!(batch.key, "d1");
    assert_eq!(batch.items, vec!["A", "B"]);
    assert!(batch.at - start >= Duration::from_secs(2));
    assert!(batch.at - start < Duration::from_millis(2050));

    assert_no_batch(&mut batches, 5000).await;

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_item_after_flush_starts_new_run() -> anyhow::Result<()> {
    // Arrange
    let (consumer, mut batches) = RecordingConsumer::new();
    let manager = Manager::builder()
        .max_wait(Duration::from_secs(2))
        .min_interval(Duration::from_millis(200))
        .consumer(consumer)
        .build()?;
    let start = Instant::now();

    manager.add("d1", "A");
    sleep(Duration::from_millis(100)).await;
    manager.add("d1", "B");
    let first = recv_batch(&mut batches, 3000).await.expect("first flush");

    // Act
    sleep_until(start + Duration::from_millis(2010)).await;
    manager.add("d1", "C");

    // Assert
    let second = recv_batch(&mut batches, 3000).await.expect("second flush");
    assert_eq!(first.items, vec!["A", "B"]);
    assert_eq!(second.items, vec!["C"]);
    assert!(second.at - first.at >= Duration::from_millis(200));
    assert!(second.at - start >= Duration::from_millis(4010));
    assert!(second.at - start < Duration::from_millis(4060));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_steady_adds_do_not_postpone_flush() -> anyhow::Result<()> {
    // Arrange
    let (consumer, mut batches) = RecordingConsumer::new();
    let manager = Manager::builder()
        .max_wait(Duration::from_secs(2))
        .min_interval(Duration::ZERO)
        .consumer(consumer)
        .build()?;
    let start = Instant::now();

    // Act
    for sequence in 0..4 {
        manager.add("thermostat", thermostat(sequence));
        sleep(Duration::from_millis(500)).await;
    }

    // Assert
    let batch = recv_batch(&mut batches, 1000).await.expect("flush");
    assert_eq!(
        batch.items,
        (0..4).map(thermostat).collect::<Vec<SensorReading>>()
    );
    assert!(batch.at - start < Duration::from_millis(2050));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_keys_are_scheduled_independently() -> anyhow::Result<()> {
    // Arrange
    let (consumer, mut batches) = RecordingConsumer::new();
    let manager = Manager::builder()
        .max_wait(Duration::from_secs(2))
        .min_interval(Duration::from_millis(200))
        .consumer(consumer)
        .build()?;
    let start = Instant::now();

    // Act
    manager.add("thermostat".to_string(), thermostat(0));
    sleep(Duration::from_secs(1)).await;
    for sequence in 0..50 {
        manager.add("doorbell".to_string(), doorbell(sequence));
    }

    // Assert
    let first = recv_batch(&mut batches, 3000).await.expect("thermostat flush");
    assert_eq!(first.key, "thermostat");
    assert_eq!(first.items, vec![thermostat(0)]);
    assert!(first.at - start < Duration::from_millis(2050));

    let second = recv_batch(&mut batches, 3000).await.expect("doorbell flush");
    assert_eq!(second.key, "doorbell");
    assert_eq!(second.items.len(), 50);
    assert!(second.at - start >= Duration::from_secs(3));
    assert!(second.at - start < Duration::from_millis(3050));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_untouched_key_never_flushes() -> anyhow::Result<()> {
    // Arrange
    let (consumer, mut batches) = RecordingConsumer::<&'static str, u32>::new();
    let manager = Manager::builder()
        .max_wait(Duration::from_millis(100))
        .consumer(consumer)
        .build()?;

    // Act
    manager.add("busy", 1);

    // Assert
    let batch = recv_batch(&mut batches, 500).await.expect("busy flush");
    assert_eq!(batch.key, "busy");
    assert_no_batch(&mut batches, 10_000).await;
    assert!(!manager.contains_key(&"idle"));
    assert_eq!(manager.key_count(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_items_are_kept() -> anyhow::Result<()> {
    // Arrange
    let (consumer, mut batches) = RecordingConsumer::new();
    let manager = Manager::builder()
        .max_wait(Duration::from_millis(100))
        .consumer(consumer)
        .build()?;

    // Act
    for item in [7, 7, 3, 7] {
        manager.add(42_u64, item);
    }

    // Assert
    let batch = recv_batch(&mut batches, 500).await.expect("flush");
    assert_eq!(batch.items, vec![7, 7, 3, 7]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cloned_manager_feeds_same_buffer() -> anyhow::Result<()> {
    // Arrange
    let (consumer, mut batches) = RecordingConsumer::new();
    let manager = Manager::builder()
        .max_wait(Duration::from_millis(100))
        .consumer(consumer)
        .build()?;
    let producer = manager.clone();

    // Act
    manager.add("k", 1);
    tokio::spawn(async move { producer.add("k", 2) }).await?;

    // Assert
    let batch = recv_batch(&mut batches, 500).await.expect("flush");
    assert_eq!(batch.items, vec![1, 2]);
    assert_eq!(manager.key_count(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_armed_flush_survives_dropped_manager() -> anyhow::Result<()> {
    // Arrange
    let (consumer, mut batches) = RecordingConsumer::new();
    let manager = Manager::builder()
        .max_wait(Duration::from_millis(100))
        .consumer(consumer)
        .build()?;

    // Act
    manager.add("k", "last words");
    drop(manager);

    // Assert
    let batch = recv_batch(&mut batches, 500).await.expect("flush");
    assert_eq!(batch.items, vec!["last words"]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_max_wait_measured_from_add_when_runtime_is_late() -> anyhow::Result<()> {
    // Arrange
    let (consumer, mut batches) = RecordingConsumer::new();
    let manager = Manager::builder()
        .max_wait(Duration::from_millis(200))
        .min_interval(Duration::from_millis(50))
        .consumer(consumer)
        .build()?;
    let start = Instant::now();

    // Act
    manager.add("k", 1_u32);
    tokio::time::advance(Duration::from_millis(300)).await;

    // Assert
    let batch = recv_batch(&mut batches, 500).await.expect("overdue flush");
    assert_eq!(batch.items, vec![1]);
    assert!(batch.at - start >= Duration::from_millis(300));
    assert!(batch.at - start < Duration::from_millis(350));

    Ok(())
}
