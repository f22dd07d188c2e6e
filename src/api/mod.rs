//! API wire models.
//!
//! These structs mirror the backend's JSON payloads verbatim. Domain code
//! decodes them and maps the fields it needs; nothing above the domain layer
//! should touch these types.

use serde::{Deserialize, Serialize};

/// Payload of the greeting endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}
