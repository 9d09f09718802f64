// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::service::CoordinatorService;
use settle_core::{CoordinatorBuilder, UpdateKind};
use std::time::Duration;

fn builder() -> CoordinatorBuilder {
    CoordinatorBuilder::new()
        .handler(UpdateKind::DataRefresh, || {})
        .handler(UpdateKind::FullRebuild, || {})
}

#[tokio::test(start_paused = true)]
async fn initial_value_is_forwarded() {
    let handle = CoordinatorService::new().spawn(builder()).unwrap();
    let (_tx, rx) = watch::channel(true);

    forward_restricted_mode(rx, handle.clone());
    tokio::time::sleep(Duration::from_millis(1)).await;

    assert!(handle.is_restricted().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn edges_toggle_restricted_mode() {
    let handle = CoordinatorService::new().spawn(builder()).unwrap();
    let (tx, rx) = watch::channel(false);
    forward_restricted_mode(rx, handle.clone());

    tx.send(true).unwrap();
    tokio::time::sleep(Duration::from_millis(1)).await;
    handle.schedule_update(UpdateKind::FullRebuild).unwrap();

    let status = handle.status().await.unwrap();
    assert!(status.restricted);
    assert_eq!(status.deferred, Some(UpdateKind::FullRebuild));

    tx.send(false).unwrap();
    tokio::time::sleep(Duration::from_millis(1)).await;

    let status = handle.status().await.unwrap();
    assert!(!status.restricted);
    assert!(status.pending);
    assert_eq!(status.deferred, None);
}

#[tokio::test(start_paused = true)]
async fn bridge_stops_when_signal_closes() {
    let handle = CoordinatorService::new().spawn(builder()).unwrap();
    let (tx, rx) = watch::channel(false);
    let bridge = forward_restricted_mode(rx, handle);

    drop(tx);
    bridge.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn bridge_stops_when_coordinator_closes() {
    let handle = CoordinatorService::new().spawn(builder()).unwrap();
    handle.shutdown().await.unwrap();

    let (_tx, rx) = watch::channel(true);
    let bridge = forward_restricted_mode(rx, handle);
    bridge.await.unwrap();
}
