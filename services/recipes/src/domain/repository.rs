#![allow(async_fn_in_trait)]

use bento_domain::id::RecipeId;
use bento_domain::recipe::{Recipe, RecipeChanges, RecipeDraft, RecipeFilter};

use crate::error::RecipesServiceError;

/// Repository for the recipe catalog.
pub trait RecipeRepository: Send + Sync {
    /// Recipes matching `filter`, ordered by id ascending.
    async fn list(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, RecipesServiceError>;

    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipesServiceError>;

    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, RecipesServiceError>;

    /// Apply `changes` atomically. Returns `None` if the recipe does not exist.
    async fn update(
        &self,
        id: RecipeId,
        changes: &RecipeChanges,
    ) -> Result<Option<Recipe>, RecipesServiceError>;

    /// Delete a recipe. Returns `true` if a row was deleted.
    async fn delete(&self, id: RecipeId) -> Result<bool, RecipesServiceError>;
}
