//! Networking seam.
//!
//! The domain layer talks to the backend through the [`Transport`] capability
//! rather than a concrete HTTP client. The template ships with
//! [`StaticTransport`], which serves a canned payload; a real deployment
//! would drop in an HTTP-backed implementation without touching the domain.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a transport.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("No resource at '{path}'")]
    NotFound { path: String },

    #[error("Transport failure: {0}")]
    Io(String),
}

/// One-method capability for fetching raw bytes from the backend.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Vec<u8>, NetError>;
}

/// In-process transport serving a fixed JSON document at a fixed path.
///
/// Stand-in for the real remote call while the backend does not exist yet.
pub struct StaticTransport {
    endpoint: String,
    payload: Vec<u8>,
}

impl StaticTransport {
    pub fn new(endpoint: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload: payload.into(),
        }
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn get(&self, path: &str) -> Result<Vec<u8>, NetError> {
        if path == self.endpoint {
            tracing::debug!(path, "serving static payload");
            Ok(self.payload.clone())
        } else {
            Err(NetError::NotFound {
                path: path.to_string(),
            })
        }
    }
}
