use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Account {
    Table,
    Id,
    Username,
    PasswordHash,
    ImageUrl,
    Bio,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Title,
    Instructions,
    MinutesToComplete,
    AccountId,
    CreatedAt,
}
