use axum::{
    extract::{Path, State},
    http::HeaderMap,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::session::require_session,
    error::Error,
    model::{
        api::{ApiResponse, DeleteRequest, ErrorDto},
        app::AppState,
        composition::{DeleteRecipeData, RecipeWithIngredients, SubmitRecipeData, SubmitRecipeRequest},
    },
    service::{composition::CompositionService, recipe::RecipeService},
};

pub static CUSTOM_TAG: &str = "custom";

/// Submit a recipe and its full composition in one transaction
#[utoipa::path(
    post,
    path = "/api/custom/submit_recipe",
    tag = CUSTOM_TAG,
    request_body = SubmitRecipeRequest,
    responses(
        (status = 200, description = "Recipe submitted", body = ApiResponse<SubmitRecipeData>),
        (status = 400, description = "Constraint violation or stale data", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<SubmitRecipeRequest>,
) -> Result<impl IntoResponse, Error> {
    let session = require_session(&state.db, &headers).await?;

    let data = RecipeService::new(&state.db)
        .submit(input, Some(session.id_user))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Submission succesful.".to_string(),
        }),
    ))
}

/// Delete recipes together with their composition rows
#[utoipa::path(
    delete,
    path = "/api/custom/delete_recipe",
    tag = CUSTOM_TAG,
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Recipe deleted", body = ApiResponse<DeleteRecipeData>),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<DeleteRequest>,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let data = RecipeService::new(&state.db).delete(input.ids).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: "Recipe deleted successfully.".to_string(),
        }),
    ))
}

/// Get a recipe with its composition embedded
#[utoipa::path(
    get,
    path = "/api/custom/recipe/{id}",
    tag = CUSTOM_TAG,
    params(
        ("id" = i32, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe retrieved", body = ApiResponse<RecipeWithIngredients>),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_session(&state.db, &headers).await?;

    let recipe = CompositionService::new(&state.db)
        .recipe_with_ingredients(id)
        .await?;

    let recipe = if let Some(recipe) = recipe {
        recipe
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data: recipe,
            message: "Recipe retrieved.".to_string(),
        }),
    )
        .into_response())
}
