use std::path::PathBuf;

use sqlx::SqlitePool;

pub async fn setup_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let pool = platebook_db::connect(&format!("sqlite:{}", path.to_str().unwrap())).await?;
    platebook_db::migrate(&pool).await?;

    Ok(pool)
}
