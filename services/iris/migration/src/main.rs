use sea_orm_migration::prelude::*;

use bento_iris_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
