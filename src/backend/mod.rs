//! Typed client for the Design Guardian backend actor.
//!
//! The actor exposes six calls (`register`, `logIn`, `createDesign`,
//! `getMyGalery`, `feed`, `whoAmi`). [`Backend`] is the seam: an in-process
//! [`MemoryBackend`] for tests and offline use, and an [`HttpBackend`] that
//! speaks JSON to a gateway. Views never hold a backend directly; they go
//! through [`BackendClient`], which adds a timeout and cancellation.

mod client;
mod factory;
mod http;
mod memory;
#[cfg(test)]
mod tests;
pub mod types;

pub use client::{BackendClient, CancelScope, DEFAULT_TIMEOUT};
pub use factory::{BackendFactory, HttpBackendFactory, MemoryBackendFactory};
pub use http::HttpBackend;
pub use memory::{MemoryBackend, MemoryStore};
pub use types::{CallResult, DesignId, DesignPreview, Principal, RegisterRequest, User};

use crate::design::NewDesign;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by backend calls.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(String),

    #[error("backend rejected the call: {0}")]
    Rejected(String),

    #[error("backend call '{method}' timed out after {timeout:?}")]
    Timeout {
        method: &'static str,
        timeout: Duration,
    },

    #[error("backend call '{0}' was cancelled")]
    Cancelled(&'static str),

    #[error("malformed backend response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}

/// The backend actor contract, bound to one caller identity.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Creates the caller's profile.
    async fn register(&self, request: RegisterRequest) -> Result<User, BackendError>;

    /// Returns the caller's profile, or `None` if they never registered.
    async fn log_in(&self) -> Result<Option<User>, BackendError>;

    async fn create_design(&self, design: NewDesign) -> Result<DesignId, BackendError>;

    /// Designs owned by the caller, oldest first.
    async fn get_my_galery(&self) -> Result<Vec<DesignPreview>, BackendError>;

    /// Public designs flagged for 3D rendering, oldest first.
    async fn feed(&self) -> Result<Vec<DesignPreview>, BackendError>;

    async fn who_am_i(&self) -> Result<Principal, BackendError>;
}
