use super::*;

/// Deleting by recipe removes every composition row of that recipe and
/// returns them
#[tokio::test]
async fn deletes_all_rows_of_recipe() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (recipe, ingredients, gram) = insert_foreign_key_dependencies(&test.state.db).await?;

    fixtures::catalog::insert_composition_row(
        &test.state.db,
        recipe.id,
        ingredients[0].id,
        200.0,
        gram.id,
    )
    .await?;
    fixtures::catalog::insert_composition_row(
        &test.state.db,
        recipe.id,
        ingredients[1].id,
        3.0,
        gram.id,
    )
    .await?;

    let composition_repo = RecipeIngredientRepository::new(&test.state.db);
    let deleted = composition_repo.delete_by_recipes(&[recipe.id]).await?;

    assert_eq!(deleted.len(), 2);

    let remaining = composition_repo.list_by_recipe(recipe.id).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Rows of other recipes survive the delete
#[tokio::test]
async fn leaves_other_recipes_untouched() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (recipe, ingredients, gram) = insert_foreign_key_dependencies(&test.state.db).await?;
    let other = fixtures::catalog::insert_recipe(&test.state.db, "Waffles").await?;

    fixtures::catalog::insert_composition_row(
        &test.state.db,
        recipe.id,
        ingredients[0].id,
        200.0,
        gram.id,
    )
    .await?;
    fixtures::catalog::insert_composition_row(
        &test.state.db,
        other.id,
        ingredients[1].id,
        3.0,
        gram.id,
    )
    .await?;

    let composition_repo = RecipeIngredientRepository::new(&test.state.db);
    let deleted = composition_repo.delete_by_recipes(&[recipe.id]).await?;

    assert_eq!(deleted.len(), 1);

    let remaining = composition_repo.list_by_recipe(other.id).await?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}

/// Expect an empty recipe id list to be a no-op
#[tokio::test]
async fn deleting_nothing_is_noop() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let composition_repo = RecipeIngredientRepository::new(&test.state.db);
    let deleted = composition_repo.delete_by_recipes(&[]).await?;

    assert!(deleted.is_empty());

    Ok(())
}
