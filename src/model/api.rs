use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for every successful API response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
    /// Human-readable outcome message
    pub message: String,
}

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Row ids targeted by a bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteRequest {
    pub ids: Vec<i32>,
}
