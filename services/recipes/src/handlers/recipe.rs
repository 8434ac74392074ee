use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use bento_core::error::AppError;
use bento_core::extract::{QsQuery, ValidJson};
use bento_domain::id::RecipeId;
use bento_domain::recipe::{Recipe, RecipeFilter};

use crate::error::RecipesServiceError;
use crate::handlers::account::MessageResponse;
use crate::handlers::guard::CurrentAccount;
use crate::state::AppState;
use crate::usecase::recipe::{
    CreateRecipeInput, CreateRecipeUseCase, DeleteRecipeUseCase, ListRecipesUseCase,
    UpdateRecipeInput, UpdateRecipeUseCase,
};

/// A path segment that is not an integer names no recipe.
fn parse_recipe_id(raw: &str) -> Result<RecipeId, RecipesServiceError> {
    raw.parse().map_err(|_| RecipesServiceError::RecipeNotFound)
}

// ── GET /recipes ────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ListRecipesQuery {
    pub ingredients: Option<String>,
    pub max_time: Option<i32>,
}

pub async fn list_recipes(
    State(state): State<AppState>,
    QsQuery(query): QsQuery<ListRecipesQuery>,
) -> Result<Json<Vec<Recipe>>, RecipesServiceError> {
    let usecase = ListRecipesUseCase {
        repo: state.recipe_repo(),
    };
    let filter = RecipeFilter::new(query.ingredients, query.max_time);
    Ok(Json(usecase.execute(filter).await?))
}

// ── POST /recipes ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub ingredients: String,
    pub time_minutes: i32,
}

#[derive(Serialize)]
pub struct RecipeCreatedResponse {
    pub message: &'static str,
    pub recipe_id: RecipeId,
}

pub async fn create_recipe(
    CurrentAccount(account): CurrentAccount,
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeCreatedResponse>), RecipesServiceError> {
    let usecase = CreateRecipeUseCase {
        repo: state.recipe_repo(),
    };
    let recipe = usecase
        .execute(
            account.id,
            CreateRecipeInput {
                title: body.title,
                ingredients: body.ingredients,
                time_minutes: body.time_minutes,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RecipeCreatedResponse {
            message: "Recipe created successfully",
            recipe_id: recipe.id,
        }),
    ))
}

// ── PUT /recipes/{id} ───────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRecipeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub time_minutes: Option<i32>,
}

pub async fn update_recipe(
    CurrentAccount(account): CurrentAccount,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<ValidJson<UpdateRecipeRequest>, AppError>,
) -> Result<Json<MessageResponse>, RecipesServiceError> {
    let id = parse_recipe_id(&raw_id)?;
    let usecase = UpdateRecipeUseCase {
        repo: state.recipe_repo(),
    };
    // An unknown recipe is reported ahead of a malformed body.
    let ValidJson(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            usecase.ensure_exists(id).await?;
            return Err(rejection.into());
        }
    };
    usecase
        .execute(
            account.id,
            id,
            UpdateRecipeInput {
                title: body.title,
                ingredients: body.ingredients,
                time_minutes: body.time_minutes,
            },
        )
        .await?;
    Ok(Json(MessageResponse {
        message: "Recipe updated successfully",
    }))
}

// ── DELETE /recipes/{id} ────────────────────────────────────────────────────

pub async fn delete_recipe(
    CurrentAccount(account): CurrentAccount,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, RecipesServiceError> {
    let id = parse_recipe_id(&raw_id)?;
    let usecase = DeleteRecipeUseCase {
        repo: state.recipe_repo(),
    };
    usecase.execute(account.id, id).await?;
    Ok(Json(MessageResponse {
        message: "Recipe deleted successfully",
    }))
}
