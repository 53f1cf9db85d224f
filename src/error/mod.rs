//! Error types for the larder server.
//!
//! Domain errors (`ConfigError`, `DataError`, `SessionError`) are aggregated
//! into a single [`Error`] via `thiserror`'s `#[from]`, so handlers propagate
//! with `?` and the HTTP mapping happens once at the boundary through
//! `IntoResponse`.

pub mod config;
pub mod data;
pub mod session;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, data::DataError, session::SessionError},
    model::api::ErrorDto,
};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Data-access error (constraint violations, single-row contract, staleness).
    #[error(transparent)]
    DataError(#[from] DataError),
    /// Session error (missing, invalid, or revoked bearer tokens).
    #[error(transparent)]
    SessionError(#[from] SessionError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving HTTP.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::DataError(err) => err.into_response(),
            Self::SessionError(err) => err.into_response(),
            Self::DbErr(err) => DataError::from(err).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper that logs the full error and answers with a generic 500 body so
/// implementation details never leak to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error.".to_string(),
            }),
        )
            .into_response()
    }
}
