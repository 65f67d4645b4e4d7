use std::path::PathBuf;

use platebook_account::{Account, repository as accounts};
use sqlx::SqlitePool;

pub async fn setup_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let pool = platebook_db::connect(&format!("sqlite:{}", path.to_str().unwrap())).await?;
    platebook_db::migrate(&pool).await?;

    Ok(pool)
}

pub async fn create_account(pool: &SqlitePool, username: impl Into<String>) -> anyhow::Result<i64> {
    let mut account = Account::new(username)?;
    account.set_credential("my_password")?;
    let id = accounts::insert(pool, &mut account).await?;

    Ok(id)
}
