use super::*;

/// Expect Ok when upserting new recipes
#[tokio::test]
async fn inserts_new_rows() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Recipe)?;

    let recipe_repo = RecipeRepository::new(&test.state.db);
    let result = recipe_repo
        .upsert_many(
            vec![recipe_write(None, "Pancakes"), recipe_write(None, "Waffles")],
            None,
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();

    assert_eq!(created.len(), 2);

    Ok(())
}

/// Re-upserting with the same primary key updates the row, refreshes
/// updated_at, and leaves created_at unchanged
#[tokio::test]
async fn updates_existing_rows() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Recipe)?;

    let recipe_repo = RecipeRepository::new(&test.state.db);
    let initial = recipe_repo
        .upsert_many(vec![recipe_write(None, "Pancakes")], None)
        .await?;
    let existing = initial.first().expect("recipe not found");

    let latest = recipe_repo
        .upsert_many(vec![recipe_write(Some(existing.id), "Crepes")], None)
        .await?;
    let updated = latest.first().expect("recipe not found");

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "Crepes");
    assert_eq!(updated.created_at, existing.created_at);
    assert!(updated.updated_at > existing.updated_at);

    Ok(())
}

/// updated_after reflects writes relative to the reference time
#[tokio::test]
async fn updated_after_tracks_writes() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Recipe)?;

    let recipe_repo = RecipeRepository::new(&test.state.db);
    let initial = recipe_repo
        .upsert_many(vec![recipe_write(None, "Pancakes")], None)
        .await?;
    let existing = initial.first().expect("recipe not found");

    let before = existing.updated_at - chrono::Duration::hours(1);
    let after = existing.updated_at + chrono::Duration::hours(1);

    assert!(recipe_repo.updated_after(existing.id, before).await?);
    assert!(!recipe_repo.updated_after(existing.id, after).await?);
    assert!(!recipe_repo.updated_after(999, before).await?);

    Ok(())
}
