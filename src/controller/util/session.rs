use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    error::{session::SessionError, Error},
    service::auth::AuthService,
};

/// Extracts the bearer token from the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, SessionError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
        .ok_or(SessionError::MissingToken)
}

/// Resolves the request's bearer token to an active session row. The
/// session's `id_user` becomes the audit actor for the request.
pub async fn require_session(
    db: &DatabaseConnection,
    headers: &HeaderMap,
) -> Result<entity::session::Model, Error> {
    let token = bearer_token(headers)?;

    AuthService::new(db).validate(&token).await
}
