use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use bento_core::config::load_dotenv;
use bento_core::tracing::init_tracing;
use bento_iris::config::IrisConfig;
use bento_iris::infra::model::ForestModel;
use bento_iris::router::build_router;
use bento_iris::state::AppState;
use bento_iris_migration::Migrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    let config = IrisConfig::from_env().context("load iris config")?;

    let model = ForestModel::load(Path::new(&config.model_path))
        .with_context(|| format!("load classifier from {}", config.model_path))?;
    info!(trees = model.tree_count(), path = %config.model_path, "classifier loaded");

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;
    Migrator::up(&db, None).await.context("run migrations")?;

    let state = AppState {
        db,
        model: Arc::new(model),
        jwt_secret: config.jwt_secret,
        token_ttl_secs: config.token_ttl_secs,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("bind {http_addr}"))?;

    info!("iris service listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
