use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
    sea_query::{Expr, Func, LikeExpr},
};

use bento_auth::account::{Account, AccountError, AccountRepository};
use bento_domain::id::{AccountId, RecipeId};
use bento_domain::recipe::{LIKE_ESCAPE, Recipe, RecipeChanges, RecipeDraft, RecipeFilter};
use bento_recipes_schema::{accounts, recipes};

use crate::domain::repository::RecipeRepository;
use crate::error::RecipesServiceError;

// ── Account repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find account by username")?;
        Ok(model.map(account_from_model))
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<Account, AccountError> {
        let inserted = accounts::ActiveModel {
            username: Set(username.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        match inserted {
            Ok(model) => Ok(account_from_model(model)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AccountError::UsernameTaken)
            }
            Err(err) => Err(anyhow::Error::new(err).context("create account").into()),
        }
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: AccountId(model.id),
        username: model.username,
        password_hash: model.password_hash,
    }
}

// ── Recipe repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRecipeRepository {
    pub db: DatabaseConnection,
}

impl RecipeRepository for DbRecipeRepository {
    async fn list(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, RecipesServiceError> {
        let mut query = recipes::Entity::find();
        if let Some(pattern) = filter.ingredients_like_pattern() {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((
                    recipes::Entity,
                    recipes::Column::Ingredients,
                ))))
                .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
            );
        }
        if let Some(max_time) = filter.max_time {
            query = query.filter(recipes::Column::TimeMinutes.lte(max_time));
        }
        let models = query
            .order_by_asc(recipes::Column::Id)
            .all(&self.db)
            .await
            .context("list recipes")?;
        Ok(models.into_iter().map(recipe_from_model).collect())
    }

    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipesServiceError> {
        let model = recipes::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find recipe by id")?;
        Ok(model.map(recipe_from_model))
    }

    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, RecipesServiceError> {
        let model = recipes::ActiveModel {
            title: Set(draft.title.clone()),
            ingredients: Set(draft.ingredients.clone()),
            time_minutes: Set(draft.time_minutes),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create recipe")?;
        Ok(recipe_from_model(model))
    }

    async fn update(
        &self,
        id: RecipeId,
        changes: &RecipeChanges,
    ) -> Result<Option<Recipe>, RecipesServiceError> {
        let txn = self.db.begin().await.context("begin recipe update")?;

        // Dropping `txn` without commit rolls back.
        let Some(model) = recipes::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .context("find recipe for update")?
        else {
            return Ok(None);
        };

        let mut am = model.into_active_model();
        if let Some(title) = &changes.title {
            am.title = Set(title.clone());
        }
        if let Some(ingredients) = &changes.ingredients {
            am.ingredients = Set(ingredients.clone());
        }
        if let Some(time_minutes) = changes.time_minutes {
            am.time_minutes = Set(time_minutes);
        }
        let updated = am.update(&txn).await.context("update recipe")?;

        txn.commit().await.context("commit recipe update")?;
        Ok(Some(recipe_from_model(updated)))
    }

    async fn delete(&self, id: RecipeId) -> Result<bool, RecipesServiceError> {
        let result = recipes::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete recipe")?;
        Ok(result.rows_affected > 0)
    }
}

fn recipe_from_model(model: recipes::Model) -> Recipe {
    Recipe {
        id: RecipeId(model.id),
        title: model.title,
        ingredients: model.ingredients,
        time_minutes: model.time_minutes,
    }
}
