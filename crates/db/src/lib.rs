use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Info, Migrate, Migrator, Plan};

mod m0001;
pub mod table;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(sqlx_migrator::vec_box![m0001::M0001])?;

    Ok(migrator)
}

/// Open an SQLite pool with foreign keys enforced.
///
/// Cascade deletes depend on `PRAGMA foreign_keys = ON`, so every
/// connection to the store must go through here.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePool::connect_with(opts).await
}

#[tracing::instrument(skip(pool))]
pub async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    migrator()?.run(&mut conn, &Plan::apply_all()).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}
