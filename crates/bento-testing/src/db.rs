//! In-memory SQLite for repository and HTTP tests.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Open a private in-memory database.
///
/// Pinned to a single pooled connection: every SQLite `:memory:` connection
/// is a separate database.
pub async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opts)
        .await
        .expect("connect in-memory sqlite")
}
