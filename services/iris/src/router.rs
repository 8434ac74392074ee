use axum::{
    Router,
    routing::{get, post},
};

use bento_core::error::not_found;
use bento_core::health::{healthz, readyz};
use bento_core::middleware::with_http_layers;

use crate::handlers::{
    account::{login, me, register},
    iris::{classes, index, list_predictions, predict},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(index))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/me", get(me))
        // Classifier
        .route("/iris/predict", post(predict))
        .route("/iris/classes", get(classes))
        .route("/iris/predictions", get(list_predictions))
        .fallback(not_found)
        .with_state(state);
    with_http_layers(router)
}
