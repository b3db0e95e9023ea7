use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

use crate::store::StoreError;

pub type DbPool = SqlitePool;

/// Open (creating if needed) the goal database and run migrations
pub async fn initialize_db(database_url: &str) -> Result<DbPool, StoreError> {
  info!(database_url, "Initializing goal database");

  let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect_with(options)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  info!("Goal database ready");
  Ok(pool)
}
