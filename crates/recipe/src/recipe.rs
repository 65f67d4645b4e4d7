use serde::Serialize;
use validator::ValidationError;

use platebook_shared::Result;

/// A recipe owned by exactly one account. The owning account must
/// exist at commit time; the store enforces the foreign key.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    /// Assigned by the store on insert.
    pub id: Option<i64>,
    title: String,
    instructions: String,
    pub minutes_to_complete: Option<i64>,
    pub account_id: i64,
}

impl Recipe {
    pub fn new(
        title: impl Into<String>,
        instructions: impl Into<String>,
        minutes_to_complete: Option<i64>,
        account_id: i64,
    ) -> Result<Self> {
        Ok(Recipe {
            id: None,
            title: validate_title(&title.into())?,
            instructions: validate_instructions(&instructions.into())?,
            minutes_to_complete,
            account_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Validates and stores the trimmed title.
    pub fn set_title(&mut self, value: impl Into<String>) -> Result<()> {
        self.title = validate_title(&value.into())?;

        Ok(())
    }

    /// Validates and stores the trimmed instructions.
    pub fn set_instructions(&mut self, value: impl Into<String>) -> Result<()> {
        self.instructions = validate_instructions(&value.into())?;

        Ok(())
    }

    pub(crate) fn from_storage(
        id: i64,
        title: String,
        instructions: String,
        minutes_to_complete: Option<i64>,
        account_id: i64,
    ) -> Self {
        Recipe {
            id: Some(id),
            title,
            instructions,
            minutes_to_complete,
            account_id,
        }
    }
}

fn validate_title(value: &str) -> Result<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        let mut err = ValidationError::new("title");
        err.message = Some("Title must be present.".into());
        return Err(err.into());
    }

    Ok(trimmed.to_owned())
}

fn validate_instructions(value: &str) -> Result<String> {
    let trimmed = value.trim();

    // length counts characters, not UTF-8 bytes
    if trimmed.chars().count() < 50 {
        let mut err = ValidationError::new("instructions");
        err.message = Some("Instructions must be at least 50 characters.".into());
        return Err(err.into());
    }

    Ok(trimmed.to_owned())
}
