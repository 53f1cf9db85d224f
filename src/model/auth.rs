use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub static SESSION_STATUS_ACTIVE: &str = "active";
pub static SESSION_STATUS_REVOKED: &str = "revoked";
pub static USER_STATUS_ACTIVE: &str = "active";

/// Length of the random alphanumeric session token issued at login
pub const SESSION_TOKEN_LENGTH: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    /// Bearer token identifying the session
    pub token: String,
}
