//! UserStore trait and REST integration.
//!
//! Provides an abstraction layer over the HTTP backend so the session
//! controller and its tests never depend on a live server.

pub mod rest;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{User, UserId, UserPayload};

/// Errors from the user store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request never completed (connection refused, timeout, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The request completed but the backend rejected it.
    #[error("backend returned HTTP {status}")]
    Status { status: u16 },

    /// The response body could not be decoded as the expected JSON.
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

/// The four operations of the user resource.
///
/// Implementations map onto `GET/POST/PUT/DELETE` of the `/users`
/// collection and item paths.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the full user collection.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Create a new record. The backend assigns the identifier.
    async fn create(&self, payload: &UserPayload) -> Result<(), StoreError>;

    /// Replace name and email of an existing record.
    async fn update(&self, id: UserId, payload: &UserPayload) -> Result<(), StoreError>;

    /// Delete a record.
    ///
    /// Returns the response status of a completed request, success or
    /// not — the caller decides what to make of a non-2xx answer. Only a
    /// request that never completed is an error.
    async fn delete(&self, id: UserId) -> Result<u16, StoreError>;
}
