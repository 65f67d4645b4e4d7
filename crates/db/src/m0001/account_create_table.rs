use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Account;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Account::Table)
        .col(
            ColumnDef::new(Account::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Account::Username).string().not_null())
        .col(ColumnDef::new(Account::PasswordHash).string().not_null())
        .col(ColumnDef::new(Account::ImageUrl).string())
        .col(ColumnDef::new(Account::Bio).string())
        .col(ColumnDef::new(Account::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Account::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
