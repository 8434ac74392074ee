use tracing::info;

use bento_domain::id::{AccountId, RecipeId};
use bento_domain::recipe::{Recipe, RecipeChanges, RecipeDraft, RecipeFilter};

use crate::domain::repository::RecipeRepository;
use crate::error::RecipesServiceError;

// ── ListRecipes ─────────────────────────────────────────────────────────────

pub struct ListRecipesUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> ListRecipesUseCase<R> {
    pub async fn execute(&self, filter: RecipeFilter) -> Result<Vec<Recipe>, RecipesServiceError> {
        self.repo.list(&filter).await
    }
}

// ── CreateRecipe ────────────────────────────────────────────────────────────

pub struct CreateRecipeInput {
    pub title: String,
    pub ingredients: String,
    pub time_minutes: i32,
}

pub struct CreateRecipeUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> CreateRecipeUseCase<R> {
    pub async fn execute(
        &self,
        author: AccountId,
        input: CreateRecipeInput,
    ) -> Result<Recipe, RecipesServiceError> {
        let draft = RecipeDraft::new(input.title, input.ingredients, input.time_minutes)?;
        let recipe = self.repo.create(&draft).await?;
        info!(recipe_id = %recipe.id, account_id = %author, "recipe created");
        Ok(recipe)
    }
}

// ── UpdateRecipe ────────────────────────────────────────────────────────────

pub struct UpdateRecipeInput {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub time_minutes: Option<i32>,
}

pub struct UpdateRecipeUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> UpdateRecipeUseCase<R> {
    pub async fn ensure_exists(&self, id: RecipeId) -> Result<(), RecipesServiceError> {
        match self.repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(RecipesServiceError::RecipeNotFound),
        }
    }

    /// Checks run in order: recipe exists, something to change, every value
    /// valid. Nothing is written unless all pass.
    pub async fn execute(
        &self,
        author: AccountId,
        id: RecipeId,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, RecipesServiceError> {
        self.ensure_exists(id).await?;
        if input.title.is_none() && input.ingredients.is_none() && input.time_minutes.is_none() {
            return Err(RecipesServiceError::MissingData);
        }
        let changes = RecipeChanges::new(input.title, input.ingredients, input.time_minutes)?;

        let recipe = self
            .repo
            .update(id, &changes)
            .await?
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        info!(recipe_id = %id, account_id = %author, "recipe updated");
        Ok(recipe)
    }
}

// ── DeleteRecipe ────────────────────────────────────────────────────────────

pub struct DeleteRecipeUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> DeleteRecipeUseCase<R> {
    pub async fn execute(&self, author: AccountId, id: RecipeId) -> Result<(), RecipesServiceError> {
        if !self.repo.delete(id).await? {
            return Err(RecipesServiceError::RecipeNotFound);
        }
        info!(recipe_id = %id, account_id = %author, "recipe deleted");
        Ok(())
    }
}
