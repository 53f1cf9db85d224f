//! Tests for the composition query endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder::{
    controller::composition::{
        recipe_composition_empty, recipe_composition_loaded, recipe_composition_snapshot,
    },
    model::app::AppState,
};
use larder_test_utils::{constant::TEST_SESSION_TOKEN, prelude::*};

use crate::controller::{bearer_headers, body_json};

/// Expect one blank row per ingredient from the empty composition
#[tokio::test]
async fn empty_returns_blank_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_session()
        .with_ingredient("Flour", "dry")
        .with_ingredient("Eggs", "protein")
        .build()
        .await?;

    let result = recipe_composition_empty(
        State(test.to_app_state::<AppState>()),
        bearer_headers(TEST_SESSION_TOKEN),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row["quantity"].is_null()));

    Ok(())
}

/// The loaded composition merges stored rows into the full ingredient list
#[tokio::test]
async fn loaded_merges_recipe_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_session()
        .build()
        .await?;

    let recipe = fixtures::catalog::insert_recipe(&test.state.db, "Pancakes").await?;
    let flour = fixtures::catalog::insert_ingredient(&test.state.db, "Flour", "dry").await?;
    fixtures::catalog::insert_ingredient(&test.state.db, "Eggs", "protein").await?;
    let gram = fixtures::catalog::insert_unit(&test.state.db, "Gram", "g", 1).await?;
    fixtures::catalog::insert_composition_row(&test.state.db, recipe.id, flour.id, 200.0, gram.id)
        .await?;

    let result = recipe_composition_loaded(
        State(test.to_app_state::<AppState>()),
        bearer_headers(TEST_SESSION_TOKEN),
        Path(recipe.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let occupied: Vec<_> = rows
        .iter()
        .filter(|row| !row["quantity"].is_null())
        .collect();
    assert_eq!(occupied.len(), 1);
    assert_eq!(occupied[0]["name"], "Flour");
    assert_eq!(occupied[0]["unit"], "Gram");

    Ok(())
}

/// The snapshot carries only the rows on the recipe
#[tokio::test]
async fn snapshot_returns_recipe_rows_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_session()
        .build()
        .await?;

    let recipe = fixtures::catalog::insert_recipe(&test.state.db, "Pancakes").await?;
    let flour = fixtures::catalog::insert_ingredient(&test.state.db, "Flour", "dry").await?;
    fixtures::catalog::insert_ingredient(&test.state.db, "Eggs", "protein").await?;
    let gram = fixtures::catalog::insert_unit(&test.state.db, "Gram", "g", 1).await?;
    fixtures::catalog::insert_composition_row(&test.state.db, recipe.id, flour.id, 200.0, gram.id)
        .await?;

    let result = recipe_composition_snapshot(
        State(test.to_app_state::<AppState>()),
        bearer_headers(TEST_SESSION_TOKEN),
        Path(recipe.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Flour");

    Ok(())
}
