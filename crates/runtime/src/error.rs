// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the coordinator service

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("coordinator service is closed")]
    Closed,
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for ServiceError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        ServiceError::Closed
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for ServiceError {
    fn from(_: tokio::sync::oneshot::error::RecvError) -> Self {
        ServiceError::Closed
    }
}
