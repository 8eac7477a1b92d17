//! Username and repository record types
//!
//! Records are deserialized strictly from the GitHub `/users/{user}/repos`
//! response: unknown fields are ignored, missing or mistyped ones are errors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LookupError, LookupResult};

/// A trimmed, non-empty GitHub username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Trim `raw` and reject it if nothing is left
    pub fn parse(raw: &str) -> LookupResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// GitHub login of the owning user or organization
    pub login: String,
}

/// One entry of a user's repository list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository owner
    pub owner: Owner,

    /// Repository name (without owner)
    pub name: String,

    /// Open issues, pull requests included
    pub open_issues_count: u64,
}

impl RepositoryRecord {
    /// Display label, `owner/name`
    pub fn label(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}
