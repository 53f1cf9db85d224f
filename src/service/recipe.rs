use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{recipe::RecipeRepository, recipe_ingredient::RecipeIngredientRepository},
    error::{data::DataError, Error},
    model::composition::{DeleteRecipeData, SubmitRecipeData, SubmitRecipeRequest},
    service::composition::CompositionService,
};

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of [`RecipeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a recipe submission in one transaction: upserts the recipe,
    /// then reconciles the submitted composition rows against the stored
    /// state by row id (absent rows insert, known rows update, stored rows
    /// missing from the input delete).
    ///
    /// When the form carries an id and a `reference_time`, the submission is
    /// rejected as stale if the recipe or its composition changed after that
    /// instant. Any error rolls back the whole submission.
    pub async fn submit(
        &self,
        submission: SubmitRecipeRequest,
        actor: Option<i32>,
    ) -> Result<SubmitRecipeData, Error> {
        let txn = self.db.begin().await?;

        let recipe_repository = RecipeRepository::new(&txn);
        let composition_repository = RecipeIngredientRepository::new(&txn);

        if let (Some(recipe_id), Some(reference_time)) =
            (submission.form_data.id, submission.reference_time)
        {
            if recipe_repository
                .updated_after(recipe_id, reference_time)
                .await?
                || composition_repository
                    .updated_after(recipe_id, reference_time)
                    .await?
            {
                return Err(DataError::StaleData.into());
            }
        }

        let recipe = recipe_repository
            .upsert_one(submission.form_data, actor)
            .await?;

        let stored = composition_repository.list_by_recipe(recipe.id).await?;
        let submitted_ids: HashSet<i32> = submission
            .recipe_ingredients_rows
            .iter()
            .filter_map(|row| row.id_recipe_ingredient)
            .collect();
        let removed: Vec<i32> = stored
            .iter()
            .map(|row| row.id)
            .filter(|id| !submitted_ids.contains(id))
            .collect();

        composition_repository
            .upsert_many(recipe.id, submission.recipe_ingredients_rows, actor)
            .await?;
        composition_repository.delete_by_ids(&removed).await?;

        txn.commit().await?;

        tracing::info!(recipe_id = %recipe.id, "Recipe submitted");

        let composition_service = CompositionService::new(self.db);

        Ok(SubmitRecipeData {
            recipes_data: RecipeRepository::new(self.db)
                .list()
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
            recipe_ingredients_loaded: composition_service.loaded(recipe.id).await?,
            recipe_ingredients_snapshot: composition_service.snapshot(recipe.id).await?,
            form_data: recipe.into(),
        })
    }

    /// Deletes recipes and their composition rows in one transaction; the
    /// composition rows go first to satisfy the foreign keys.
    pub async fn delete(&self, recipe_ids: Vec<i32>) -> Result<DeleteRecipeData, Error> {
        let txn = self.db.begin().await?;

        let composition_repository = RecipeIngredientRepository::new(&txn);
        let recipe_repository = RecipeRepository::new(&txn);

        composition_repository.delete_by_recipes(&recipe_ids).await?;
        recipe_repository.delete_by_ids(&recipe_ids).await?;

        txn.commit().await?;

        tracing::info!(?recipe_ids, "Recipes deleted");

        Ok(DeleteRecipeData {
            recipes_data: RecipeRepository::new(self.db)
                .list()
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
            recipe_ingredients_data: CompositionService::new(self.db).empty().await?,
        })
    }
}
