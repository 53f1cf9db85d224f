use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Authorization header is missing or is not a bearer token")]
    MissingToken,
    #[error("Session token does not match an active session")]
    InvalidToken,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::MissingToken => "Missing session token.",
            Self::InvalidToken => "Invalid session.",
        };

        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
