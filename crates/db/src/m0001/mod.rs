mod account_create_table;
mod account_create_username_idx;
mod recipe_create_account_idx;
mod recipe_create_table;

use sqlx_migrator::vec_box;

pub struct M0001;

sqlx_migrator::sqlite_migration!(
    M0001,
    "main",
    "m0001",
    vec_box![],
    vec_box![
        account_create_table::Operation,
        account_create_username_idx::Operation,
        recipe_create_table::Operation,
        recipe_create_account_idx::Operation
    ]
);
