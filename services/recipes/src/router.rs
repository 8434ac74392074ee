use axum::{
    Router,
    routing::{get, post, put},
};

use bento_core::error::not_found;
use bento_core::health::{healthz, readyz};
use bento_core::middleware::with_http_layers;

use crate::handlers::{
    account::{login, protected, register},
    recipe::{create_recipe, delete_recipe, list_recipes, update_recipe},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/protected", get(protected))
        // Recipes
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route("/recipes/{id}", put(update_recipe).delete(delete_recipe))
        .fallback(not_found)
        .with_state(state);
    with_http_layers(router)
}
