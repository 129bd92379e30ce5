use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::error::AppResult;

const NEVER_RECYCLE: Duration = Duration::from_secs(100 * 365 * 86_400);

pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> AppResult<DatabaseConnection> {
    let db = Database::connect(connect_options(database_url, max_connections)).await?;

    if !is_memory(database_url) {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA journal_mode=WAL".to_string(),
        ))
        .await?;
    }

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys=ON".to_string(),
    ))
    .await?;

    Migrator::up(&db, None).await?;
    tracing::debug!(url = %database_url, "database migrated");
    Ok(db)
}

fn connect_options(database_url: &str, max_connections: u32) -> ConnectOptions {
    let mut opts = ConnectOptions::new(database_url);
    opts.min_connections(1).sqlx_logging(false);
    if is_memory(database_url) {
        // Every pooled connection to `:memory:` opens its own empty database, so the
        // one connection must never be reaped or recycled.
        opts.max_connections(1).idle_timeout(NEVER_RECYCLE).max_lifetime(NEVER_RECYCLE);
    } else {
        opts.max_connections(max_connections.max(1));
    }
    opts
}

fn is_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
