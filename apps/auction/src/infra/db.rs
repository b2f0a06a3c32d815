use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, is_sqlite_memory, DbProfile};
use crate::error::AppError;

/// Opens a pool for `url`. This function does NOT run any migrations.
///
/// In-memory SQLite gets a single connection: every connection would
/// otherwise see its own empty database.
pub async fn connect_url(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    if is_sqlite_memory(url) {
        opt.min_connections(1).max_connections(1);
    }
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    let conn = Database::connect(opt).await?;
    Ok(conn)
}

/// Connects using the URL configured for `profile`. No migrations.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    connect_url(&url).await
}

/// Connects and brings the schema up to date.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    bootstrap_url(&url).await
}

pub async fn bootstrap_url(url: &str) -> Result<DatabaseConnection, AppError> {
    info!(sqlite = url.starts_with("sqlite:"), "bootstrap=start");
    let conn = connect_url(url).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!("bootstrap=ready");
    Ok(conn)
}
