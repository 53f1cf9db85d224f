use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use sea_orm::TransactionTrait;

use crate::{
    controller::{util::session::require_session, CRUD_TAG},
    data::unit::UnitRepository,
    error::Error,
    model::{
        api::{ApiResponse, DeleteRequest, ErrorDto},
        app::AppState,
        catalog::{UnitDto, UnitWrite},
    },
};

/// List all units, ordered by id
#[utoipa::path(
    get,
    path = "/api/crud/units",
    tag = CRUD_TAG,
    responses(
        (status = 200, description = "Units retrieved", body = ApiResponse<Vec<UnitDto>>),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_units(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let units = UnitRepository::new(&state.db).list().await?;
    let data: Vec<UnitDto> = units.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Units retrieved.".to_string(),
        }),
    ))
}

/// Bulk insert-or-update units, returning the persisted rows
#[utoipa::path(
    post,
    path = "/api/crud/units",
    tag = CRUD_TAG,
    request_body = Vec<UnitWrite>,
    responses(
        (status = 200, description = "Units upserted", body = ApiResponse<Vec<UnitDto>>),
        (status = 400, description = "Constraint violation", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_units(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(rows): Json<Vec<UnitWrite>>,
) -> Result<impl IntoResponse, Error> {
    let session = require_session(&state.db, &headers).await?;

    let txn = state.db.begin().await?;
    let units = UnitRepository::new(&txn)
        .upsert_many(rows, Some(session.id_user))
        .await?;
    txn.commit().await?;

    let data: Vec<UnitDto> = units.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Successfully submitted to Units.".to_string(),
        }),
    ))
}

/// Delete units by id, returning the deleted rows
#[utoipa::path(
    delete,
    path = "/api/crud/units",
    tag = CRUD_TAG,
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Units deleted", body = ApiResponse<Vec<UnitDto>>),
        (status = 400, description = "Constraint violation", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_units(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<DeleteRequest>,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let deleted = UnitRepository::new(&state.db)
        .delete_by_ids(&request.ids)
        .await?;
    let data: Vec<UnitDto> = deleted.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Units deleted.".to_string(),
        }),
    ))
}
