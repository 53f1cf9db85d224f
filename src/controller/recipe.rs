use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use sea_orm::TransactionTrait;

use crate::{
    controller::{util::session::require_session, CRUD_TAG},
    data::recipe::RecipeRepository,
    error::Error,
    model::{
        api::{ApiResponse, DeleteRequest, ErrorDto},
        app::AppState,
        catalog::{RecipeDto, RecipeWrite},
    },
};

/// List all recipes, ordered by id
#[utoipa::path(
    get,
    path = "/api/crud/recipes",
    tag = CRUD_TAG,
    responses(
        (status = 200, description = "Recipes retrieved", body = ApiResponse<Vec<RecipeDto>>),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let recipes = RecipeRepository::new(&state.db).list().await?;
    let data: Vec<RecipeDto> = recipes.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Recipes retrieved.".to_string(),
        }),
    ))
}

/// Bulk insert-or-update recipes, returning the persisted rows
#[utoipa::path(
    post,
    path = "/api/crud/recipes",
    tag = CRUD_TAG,
    request_body = Vec<RecipeWrite>,
    responses(
        (status = 200, description = "Recipes upserted", body = ApiResponse<Vec<RecipeDto>>),
        (status = 400, description = "Constraint violation", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(rows): Json<Vec<RecipeWrite>>,
) -> Result<impl IntoResponse, Error> {
    let session = require_session(&state.db, &headers).await?;

    let txn = state.db.begin().await?;
    let recipes = RecipeRepository::new(&txn)
        .upsert_many(rows, Some(session.id_user))
        .await?;
    txn.commit().await?;

    let data: Vec<RecipeDto> = recipes.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Successfully submitted to Recipes.".to_string(),
        }),
    ))
}

/// Delete recipes by id, returning the deleted rows. Fails with an integrity
/// error while composition rows still reference a recipe; the composite
/// delete endpoint removes both together.
#[utoipa::path(
    delete,
    path = "/api/crud/recipes",
    tag = CRUD_TAG,
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Recipes deleted", body = ApiResponse<Vec<RecipeDto>>),
        (status = 400, description = "Constraint violation", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<DeleteRequest>,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let deleted = RecipeRepository::new(&state.db)
        .delete_by_ids(&request.ids)
        .await?;
    let data: Vec<RecipeDto> = deleted.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Recipes deleted.".to_string(),
        }),
    ))
}
