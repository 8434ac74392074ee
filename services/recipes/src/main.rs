use anyhow::Context as _;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use bento_core::config::load_dotenv;
use bento_core::tracing::init_tracing;
use bento_recipes::config::RecipesConfig;
use bento_recipes::router::build_router;
use bento_recipes::state::AppState;
use bento_recipes_migration::Migrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    let config = RecipesConfig::from_env().context("load recipes config")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;
    Migrator::up(&db, None).await.context("run migrations")?;

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        token_ttl_secs: config.token_ttl_secs,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("bind {http_addr}"))?;

    info!("recipes service listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
