//! Types that exist only to document the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "error": "Profile not found" }))]
pub struct ErrorResponse {
    /// Human-readable message. Internal failures read "Failed to <operation>".
    pub error: String,
}
