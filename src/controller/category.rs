use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use sea_orm::TransactionTrait;

use crate::{
    controller::{util::session::require_session, CRUD_TAG},
    data::category::CategoryRepository,
    error::Error,
    model::{
        api::{ApiResponse, DeleteRequest, ErrorDto},
        app::AppState,
        catalog::{CategoryDto, CategoryWrite},
    },
};

/// List all categories, ordered by id
#[utoipa::path(
    get,
    path = "/api/crud/categories",
    tag = CRUD_TAG,
    responses(
        (status = 200, description = "Categories retrieved", body = ApiResponse<Vec<CategoryDto>>),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let categories = CategoryRepository::new(&state.db).list().await?;
    let data: Vec<CategoryDto> = categories.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Categories retrieved.".to_string(),
        }),
    ))
}

/// Bulk insert-or-update categories, returning the persisted rows
#[utoipa::path(
    post,
    path = "/api/crud/categories",
    tag = CRUD_TAG,
    request_body = Vec<CategoryWrite>,
    responses(
        (status = 200, description = "Categories upserted", body = ApiResponse<Vec<CategoryDto>>),
        (status = 400, description = "Constraint violation", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(rows): Json<Vec<CategoryWrite>>,
) -> Result<impl IntoResponse, Error> {
    let session = require_session(&state.db, &headers).await?;

    let txn = state.db.begin().await?;
    let categories = CategoryRepository::new(&txn)
        .upsert_many(rows, Some(session.id_user))
        .await?;
    txn.commit().await?;

    let data: Vec<CategoryDto> = categories.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Successfully submitted to Categories.".to_string(),
        }),
    ))
}

/// Delete categories by id, returning the deleted rows
#[utoipa::path(
    delete,
    path = "/api/crud/categories",
    tag = CRUD_TAG,
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Categories deleted", body = ApiResponse<Vec<CategoryDto>>),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<DeleteRequest>,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let deleted = CategoryRepository::new(&state.db)
        .delete_by_ids(&request.ids)
        .await?;
    let data: Vec<CategoryDto> = deleted.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Categories deleted.".to_string(),
        }),
    ))
}
