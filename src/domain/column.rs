use crate::domain::ids::RawId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of a board column (e.g., COL1, COL2, or a UUID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawId")]
pub struct ColumnId(String);

impl ColumnId {
    const PREFIX: &'static str = "COL";

    /// Creates a ColumnId from a counter
    pub fn new(counter: u64) -> Self {
        Self(format!("{}{}", Self::PREFIX, counter))
    }

    pub(crate) fn from_raw(raw: String) -> Self {
        Self(raw)
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColumnId {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::error::KanbanError::InvalidColumnId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for ColumnId {
    type Error = crate::error::KanbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<RawId> for ColumnId {
    type Error = crate::error::KanbanError;

    fn try_from(value: RawId) -> Result<Self, Self::Error> {
        String::from(value).parse()
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered container for tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Column {
    pub fn new(id: ColumnId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }
}
