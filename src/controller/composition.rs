use axum::{
    extract::{Path, State},
    http::HeaderMap,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::{util::session::require_session, CRUD_TAG},
    error::Error,
    model::{
        api::{ApiResponse, ErrorDto},
        app::AppState,
        composition::CompositionRow,
    },
    service::composition::CompositionService,
};

/// Every ingredient with blank quantity/unit columns, for a new recipe form
#[utoipa::path(
    get,
    path = "/api/crud/recipe_composition_empty",
    tag = CRUD_TAG,
    responses(
        (status = 200, description = "Empty recipe composition retrieved", body = ApiResponse<Vec<CompositionRow>>),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recipe_composition_empty(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let data = CompositionService::new(&state.db).empty().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Empty recipe composition retrieved.".to_string(),
        }),
    ))
}

/// Every ingredient outer-merged with the recipe's composition rows, for a
/// recipe form loaded for editing
#[utoipa::path(
    get,
    path = "/api/crud/recipe_composition_loaded/{id_recipe}",
    tag = CRUD_TAG,
    params(
        ("id_recipe" = i32, Path, description = "Recipe id to load the composition for")
    ),
    responses(
        (status = 200, description = "Loaded recipe composition retrieved", body = ApiResponse<Vec<CompositionRow>>),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recipe_composition_loaded(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id_recipe): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let data = CompositionService::new(&state.db).loaded(id_recipe).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Loaded recipe composition retrieved.".to_string(),
        }),
    ))
}

/// Only the rows actually on the recipe, with ingredient and unit details
#[utoipa::path(
    get,
    path = "/api/crud/recipe_composition_snapshot/{id_recipe}",
    tag = CRUD_TAG,
    params(
        ("id_recipe" = i32, Path, description = "Recipe id to snapshot")
    ),
    responses(
        (status = 200, description = "Recipe composition snapshot retrieved", body = ApiResponse<Vec<CompositionRow>>),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recipe_composition_snapshot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id_recipe): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let data = CompositionService::new(&state.db)
        .snapshot(id_recipe)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Recipe composition snapshot retrieved.".to_string(),
        }),
    ))
}
