use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum DataError {
    /// A single-row operation produced no rows.
    #[error("Expected returning data but none was found")]
    NoRowsReturned,
    /// A single-row operation produced more than one row.
    #[error("Expected a single row but {0} were returned")]
    MultipleRowsReturned(usize),
    /// Rows involved in the operation changed after the submitted reference time.
    #[error("One or more rows were updated after the submitted reference time")]
    StaleData,
    #[error(transparent)]
    DbErr(#[from] DbErr),
}

impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        match self {
            Self::NoRowsReturned => {
                tracing::debug!("{}", self);

                bad_request("Expected returning data but none was found.")
            }
            Self::MultipleRowsReturned(_) => {
                tracing::debug!("{}", self);

                bad_request("Expected a single row but multiple were returned.")
            }
            Self::StaleData => {
                tracing::debug!("{}", self);

                bad_request("Stale data.")
            }
            Self::DbErr(err) => db_err_response(err),
        }
    }
}

/// Maps database errors onto the client-facing status contract: constraint
/// breaches are the caller's fault (400), unreachable databases are 503, and
/// everything else collapses into a logged 500.
fn db_err_response(err: DbErr) -> Response {
    if let Some(sql_err) = err.sql_err() {
        match sql_err {
            SqlErr::UniqueConstraintViolation(_) | SqlErr::ForeignKeyConstraintViolation(_) => {
                tracing::debug!("{}", err);

                return bad_request("Integrity error.");
            }
            _ => {}
        }
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            tracing::error!("{}", err);

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: "Database is unavailable.".to_string(),
                }),
            )
                .into_response()
        }
        err => InternalServerError(err).into_response(),
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}
