use platebook_db::table::Account as AccountTable;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

use platebook_shared::{Error, Result};

use crate::Account;

#[derive(FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    password_hash: String,
    image_url: Option<String>,
    bio: Option<String>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account::from_storage(row.id, row.username, row.password_hash, row.image_url, row.bio)
    }
}

pub enum FindType {
    Id(i64),
    Username(String),
}

/// Inserts the account and assigns its store-generated id. Fails with
/// an integrity error if the username is taken or no credential has
/// been set.
#[tracing::instrument(skip(pool, account))]
pub async fn insert(pool: &SqlitePool, account: &mut Account) -> Result<i64> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(AccountTable::Table)
        .columns([
            AccountTable::Username,
            AccountTable::PasswordHash,
            AccountTable::ImageUrl,
            AccountTable::Bio,
            AccountTable::CreatedAt,
        ])
        .values_panic([
            account.username().into(),
            account.password_hash().map(str::to_owned).into(),
            account.image_url.clone().into(),
            account.bio.clone().into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    let id = result.last_insert_rowid();
    account.id = Some(id);

    Ok(id)
}

pub async fn find(pool: &SqlitePool, arg_type: FindType) -> Result<Option<Account>> {
    let mut statement = Query::select()
        .columns([
            AccountTable::Id,
            AccountTable::Username,
            AccountTable::PasswordHash,
            AccountTable::ImageUrl,
            AccountTable::Bio,
        ])
        .from(AccountTable::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(AccountTable::Id).eq(id)),
        FindType::Username(username) => {
            statement.and_where(Expr::col(AccountTable::Username).eq(username))
        }
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    let row = sqlx::query_as_with::<_, AccountRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Account::from))
}

pub async fn update(pool: &SqlitePool, account: &Account) -> Result<()> {
    let Some(id) = account.id else {
        return Err(Error::Integrity("account has not been persisted".to_owned()));
    };

    let mut statement = Query::update()
        .table(AccountTable::Table)
        .and_where(Expr::col(AccountTable::Id).eq(id))
        .value(AccountTable::Username, account.username())
        .value(AccountTable::ImageUrl, account.image_url.clone())
        .value(AccountTable::Bio, account.bio.clone())
        .to_owned();

    if let Some(password_hash) = account.password_hash() {
        statement.value(AccountTable::PasswordHash, password_hash);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Deletes the account. Owned recipes go with it through the store's
/// cascade action.
#[tracing::instrument(skip(pool))]
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let statement = Query::delete()
        .from_table(AccountTable::Table)
        .and_where(Expr::col(AccountTable::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub async fn is_username_taken(pool: &SqlitePool, username: impl Into<String>) -> Result<bool> {
    let statement = Query::select()
        .column(AccountTable::Id)
        .from(AccountTable::Table)
        .and_where(Expr::col(AccountTable::Username).eq(username.into()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}
