use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use sea_orm::TransactionTrait;

use crate::{
    controller::{util::session::require_session, CRUD_TAG},
    data::ingredient::IngredientRepository,
    error::Error,
    model::{
        api::{ApiResponse, DeleteRequest, ErrorDto},
        app::AppState,
        catalog::{IngredientDto, IngredientWrite},
    },
};

/// List all ingredients, ordered by id
#[utoipa::path(
    get,
    path = "/api/crud/ingredients",
    tag = CRUD_TAG,
    responses(
        (status = 200, description = "Ingredients retrieved", body = ApiResponse<Vec<IngredientDto>>),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let ingredients = IngredientRepository::new(&state.db).list().await?;
    let data: Vec<IngredientDto> = ingredients.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Ingredients retrieved.".to_string(),
        }),
    ))
}

/// Bulk insert-or-update ingredients, returning the persisted rows
#[utoipa::path(
    post,
    path = "/api/crud/ingredients",
    tag = CRUD_TAG,
    request_body = Vec<IngredientWrite>,
    responses(
        (status = 200, description = "Ingredients upserted", body = ApiResponse<Vec<IngredientDto>>),
        (status = 400, description = "Constraint violation", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_ingredients(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(rows): Json<Vec<IngredientWrite>>,
) -> Result<impl IntoResponse, Error> {
    let session = require_session(&state.db, &headers).await?;

    let txn = state.db.begin().await?;
    let ingredients = IngredientRepository::new(&txn)
        .upsert_many(rows, Some(session.id_user))
        .await?;
    txn.commit().await?;

    let data: Vec<IngredientDto> = ingredients.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Successfully submitted to Ingredients.".to_string(),
        }),
    ))
}

/// Delete ingredients by id, returning the deleted rows
#[utoipa::path(
    delete,
    path = "/api/crud/ingredients",
    tag = CRUD_TAG,
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Ingredients deleted", body = ApiResponse<Vec<IngredientDto>>),
        (status = 400, description = "Constraint violation", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ingredients(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<DeleteRequest>,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let deleted = IngredientRepository::new(&state.db)
        .delete_by_ids(&request.ids)
        .await?;
    let data: Vec<IngredientDto> = deleted.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Ingredients deleted.".to_string(),
        }),
    ))
}
