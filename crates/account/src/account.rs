use serde::Serialize;
use validator::ValidationError;

use platebook_shared::{Error, Result};

use crate::password;

/// A registered account that owns recipes.
///
/// The credential hash is write-only: it is set through
/// [`Account::set_credential`] and checked through
/// [`Account::authenticate`], and is skipped by serialization.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Assigned by the store on insert.
    pub id: Option<i64>,
    username: String,
    #[serde(skip_serializing)]
    password_hash: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl Account {
    pub fn new(username: impl Into<String>) -> Result<Self> {
        Ok(Account {
            id: None,
            username: validate_username(&username.into())?,
            password_hash: None,
            image_url: None,
            bio: None,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Validates and stores the trimmed username.
    pub fn set_username(&mut self, value: impl Into<String>) -> Result<()> {
        self.username = validate_username(&value.into())?;

        Ok(())
    }

    /// Hashes the plaintext with a fresh salt and stores the hash. The
    /// plaintext is discarded; trimmed length must be at least 6.
    pub fn set_credential(&mut self, plaintext: &str) -> Result<()> {
        validate_credential(plaintext)?;
        self.password_hash = Some(password::hash_password(plaintext)?);

        Ok(())
    }

    /// Credentials may not be viewed. Always fails.
    pub fn credential(&self) -> Result<&str> {
        Err(Error::CredentialRead)
    }

    /// Whether the plaintext matches the stored credential. An account
    /// with no credential set never authenticates.
    pub fn authenticate(&self, plaintext: &str) -> Result<bool> {
        match &self.password_hash {
            Some(hash) => password::verify_password(plaintext, hash),
            None => Ok(false),
        }
    }

    pub(crate) fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    pub(crate) fn from_storage(
        id: i64,
        username: String,
        password_hash: String,
        image_url: Option<String>,
        bio: Option<String>,
    ) -> Self {
        Account {
            id: Some(id),
            username,
            password_hash: Some(password_hash),
            image_url,
            bio,
        }
    }
}

fn validate_username(value: &str) -> Result<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        let mut err = ValidationError::new("username");
        err.message = Some("Username must be present.".into());
        return Err(err.into());
    }

    Ok(trimmed.to_owned())
}

fn validate_credential(plaintext: &str) -> Result<()> {
    // length counts characters, not UTF-8 bytes
    if plaintext.trim().chars().count() < 6 {
        let mut err = ValidationError::new("password");
        err.message = Some("Password must be at least 6 characters.".into());
        return Err(err.into());
    }

    Ok(())
}
