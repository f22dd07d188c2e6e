//! Business logic.
//!
//! Services in this layer consume the networking seam, decode API models,
//! and expose domain values to the presentation layer. This is the layer
//! unit tests should cover most densely.

use std::sync::Arc;

use thiserror::Error;

use crate::api::GreetingResponse;
use crate::net::{NetError, Transport};

/// Errors that can occur while producing domain data.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Fetch failed: {0}")]
    Transport(#[from] NetError),

    #[error("Malformed greeting payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the greeting from the backend and maps it to a domain value.
pub struct GreetingService {
    transport: Arc<dyn Transport>,
    endpoint: String,
}

impl GreetingService {
    pub fn new(transport: Arc<dyn Transport>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Fetch and decode the greeting message.
    pub async fn get_data(&self) -> Result<String, DomainError> {
        let bytes = self.transport.get(&self.endpoint).await?;
        let response: GreetingResponse = serde_json::from_slice(&bytes)?;
        tracing::info!(message = %response.message, "greeting fetched");
        Ok(response.message)
    }
}
