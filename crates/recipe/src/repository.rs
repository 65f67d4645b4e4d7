use platebook_db::table::Recipe as RecipeTable;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

use platebook_shared::{Error, Result};

use crate::Recipe;

#[derive(FromRow)]
struct RecipeRow {
    id: i64,
    title: String,
    instructions: String,
    minutes_to_complete: Option<i64>,
    account_id: i64,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe::from_storage(
            row.id,
            row.title,
            row.instructions,
            row.minutes_to_complete,
            row.account_id,
        )
    }
}

const COLUMNS: [RecipeTable; 5] = [
    RecipeTable::Id,
    RecipeTable::Title,
    RecipeTable::Instructions,
    RecipeTable::MinutesToComplete,
    RecipeTable::AccountId,
];

/// Inserts the recipe and assigns its store-generated id. Fails with
/// an integrity error if the owning account does not exist.
#[tracing::instrument(skip(pool, recipe))]
pub async fn insert(pool: &SqlitePool, recipe: &mut Recipe) -> Result<i64> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(RecipeTable::Table)
        .columns([
            RecipeTable::Title,
            RecipeTable::Instructions,
            RecipeTable::MinutesToComplete,
            RecipeTable::AccountId,
            RecipeTable::CreatedAt,
        ])
        .values_panic([
            recipe.title().into(),
            recipe.instructions().into(),
            recipe.minutes_to_complete.into(),
            recipe.account_id.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    let id = result.last_insert_rowid();
    recipe.id = Some(id);

    Ok(id)
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Recipe>> {
    let statement = Query::select()
        .columns(COLUMNS)
        .from(RecipeTable::Table)
        .and_where(Expr::col(RecipeTable::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Recipe::from))
}

/// All recipes owned by the given account.
pub async fn find_for_account(pool: &SqlitePool, account_id: i64) -> Result<Vec<Recipe>> {
    let statement = Query::select()
        .columns(COLUMNS)
        .from(RecipeTable::Table)
        .and_where(Expr::col(RecipeTable::AccountId).eq(account_id))
        .order_by(RecipeTable::Id, sea_query::Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Recipe::from).collect())
}

pub async fn update(pool: &SqlitePool, recipe: &Recipe) -> Result<()> {
    let Some(id) = recipe.id else {
        return Err(Error::Integrity("recipe has not been persisted".to_owned()));
    };

    let statement = Query::update()
        .table(RecipeTable::Table)
        .and_where(Expr::col(RecipeTable::Id).eq(id))
        .value(RecipeTable::Title, recipe.title())
        .value(RecipeTable::Instructions, recipe.instructions())
        .value(RecipeTable::MinutesToComplete, recipe.minutes_to_complete)
        .value(RecipeTable::AccountId, recipe.account_id)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

#[tracing::instrument(skip(pool))]
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let statement = Query::delete()
        .from_table(RecipeTable::Table)
        .and_where(Expr::col(RecipeTable::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
