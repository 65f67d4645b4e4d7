use platebook_account::{Account, repository};
use temp_dir::TempDir;

mod helpers;

#[test]
fn rejects_empty_and_whitespace_usernames() {
    assert!(Account::new("").unwrap_err().is_validation());
    assert!(Account::new("   ").unwrap_err().is_validation());

    let mut account = Account::new("alice").expect("Failed to create account");
    assert!(account.set_username("  ").unwrap_err().is_validation());
    // a failed assignment leaves the previous value in place
    assert_eq!(account.username(), "alice");
}

#[test]
fn rejects_credentials_shorter_than_six_characters() {
    let mut account = Account::new("alice").expect("Failed to create account");

    assert!(account.set_credential("").unwrap_err().is_validation());
    assert!(account.set_credential("12345").unwrap_err().is_validation());
    assert!(account.set_credential(" 12345 ").unwrap_err().is_validation());

    account
        .set_credential("123456")
        .expect("Six characters should be accepted");
}

#[test]
fn never_authenticates_without_a_credential() {
    let account = Account::new("alice").expect("Failed to create account");
    assert!(!account
        .authenticate("anything")
        .expect("Authenticating without a credential should not error"));
    assert!(!account.authenticate("").expect("Failed to authenticate"));
}

#[test]
fn credential_has_no_read_path() {
    let mut account = Account::new("alice").expect("Failed to create account");
    assert!(matches!(
        account.credential(),
        Err(platebook_shared::Error::CredentialRead)
    ));

    account
        .set_credential("secret1")
        .expect("Failed to set credential");
    assert!(matches!(
        account.credential(),
        Err(platebook_shared::Error::CredentialRead)
    ));
}

#[test]
fn serialization_never_exposes_the_hash() {
    let mut account = Account::new("alice").expect("Failed to create account");
    account
        .set_credential("secret1")
        .expect("Failed to set credential");

    let json = serde_json::to_value(&account).expect("Failed to serialize account");
    let object = json.as_object().expect("Account should serialize to an object");

    assert_eq!(object["username"], "alice");
    assert!(!object.contains_key("password_hash"));
}

#[tokio::test]
async fn authenticates_round_trip_after_persistence() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;

    let mut alice = Account::new("alice")?;
    alice.set_credential("secret1")?;
    let id = repository::insert(&pool, &mut alice).await?;

    let stored = repository::find(&pool, repository::FindType::Id(id))
        .await?
        .expect("Account should exist after insert");

    assert_eq!(stored.username(), "alice");
    assert!(stored.authenticate("secret1")?);
    assert!(!stored.authenticate("wrong")?);
    assert!(stored.credential().is_err());

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_usernames_at_commit() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;

    let mut first = Account::new("bob")?;
    first.set_credential("secret1")?;
    repository::insert(&pool, &mut first).await?;

    let mut second = Account::new("bob")?;
    second.set_credential("another1")?;
    let err = repository::insert(&pool, &mut second)
        .await
        .expect_err("Duplicate username should violate the unique index");

    assert!(err.is_integrity());
    assert!(repository::is_username_taken(&pool, "bob").await?);

    Ok(())
}

#[tokio::test]
async fn rejects_accounts_without_a_credential_at_commit() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;

    let mut account = Account::new("carol")?;
    let err = repository::insert(&pool, &mut account)
        .await
        .expect_err("Missing credential should violate NOT NULL");

    assert!(err.is_integrity());
    assert!(account.id.is_none());

    Ok(())
}

#[tokio::test]
async fn updates_persist_trimmed_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;

    let mut account = Account::new("dave")?;
    account.set_credential("secret1")?;
    account.bio = Some("Home cook.".to_owned());
    let id = repository::insert(&pool, &mut account).await?;

    account.set_username("  dave_updated  ")?;
    repository::update(&pool, &account).await?;

    let stored = repository::find(&pool, repository::FindType::Username("dave_updated".to_owned()))
        .await?
        .expect("Updated account should be findable by its new username");

    assert_eq!(stored.id, Some(id));
    assert_eq!(stored.username(), "dave_updated");
    assert_eq!(stored.bio.as_deref(), Some("Home cook."));

    Ok(())
}

#[tokio::test]
async fn delete_removes_the_account() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;

    let mut account = Account::new("erin")?;
    account.set_credential("secret1")?;
    let id = repository::insert(&pool, &mut account).await?;

    repository::delete(&pool, id).await?;

    let found = repository::find(&pool, repository::FindType::Id(id)).await?;
    assert!(found.is_none());

    Ok(())
}
