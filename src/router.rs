//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! collected into a unified OpenAPI document, and served alongside Swagger UI
//! at `/api/docs`.

use axum::{http::StatusCode, routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Open a session for a user (find-or-create by email)
/// - `POST /api/auth/logout` - Revoke the bearer session
/// - `GET/POST/DELETE /api/crud/{categories,units,ingredients,recipes}` - CRUD per entity
/// - `GET /api/crud/recipe_composition_{empty,loaded,snapshot}` - composition queries
/// - `POST /api/custom/submit_recipe` - composite recipe submission
/// - `DELETE /api/custom/delete_recipe` - composite recipe deletion
/// - `GET /api/custom/recipe/{id}` - recipe with embedded composition
/// - `GET /health` - liveness probe
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Larder", description = "Larder API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session bookkeeping routes"),
        (name = controller::CRUD_TAG, description = "CRUD API routes"),
        (name = controller::custom::CUSTOM_TAG, description = "Composite recipe routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::category::list_categories,
            controller::category::upsert_categories,
            controller::category::delete_categories
        ))
        .routes(routes!(
            controller::unit::list_units,
            controller::unit::upsert_units,
            controller::unit::delete_units
        ))
        .routes(routes!(
            controller::ingredient::list_ingredients,
            controller::ingredient::upsert_ingredients,
            controller::ingredient::delete_ingredients
        ))
        .routes(routes!(
            controller::recipe::list_recipes,
            controller::recipe::upsert_recipes,
            controller::recipe::delete_recipes
        ))
        .routes(routes!(controller::composition::recipe_composition_empty))
        .routes(routes!(controller::composition::recipe_composition_loaded))
        .routes(routes!(controller::composition::recipe_composition_snapshot))
        .routes(routes!(controller::custom::submit_recipe))
        .routes(routes!(controller::custom::delete_recipe))
        .routes(routes!(controller::custom::get_recipe))
        .split_for_parts();

    let routes = routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route("/health", get(health));

    routes
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "healthy." })),
    )
}
