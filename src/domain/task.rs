use crate::domain::{column::ColumnId, ids::RawId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of a task card (e.g., TASK1, TASK2, or a UUID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawId")]
pub struct TaskId(String);

impl TaskId {
    const PREFIX: &'static str = "TASK";

    /// Creates a TaskId from a counter
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

impl FromStr for TaskId {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::error::KanbanError::InvalidTaskId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for TaskId {
    type Error = crate::error::KanbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<RawId> for TaskId {
    type Error = crate::error::KanbanError;

    fn try_from(value: RawId) -> Result<Self, Self::Error> {
        String::from(value).parse()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of work owned by exactly one column at a time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task owned by `column_id`
    pub fn new(id: TaskId, column_id: ColumnId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            column_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Hands the task over to another column.
    ///
    /// Returns `false` when the task already belongs to `column_id`.
    pub fn reassign(&mut self, column_id: ColumnId) -> bool {
        if self.column_id == column_id {
            return false;
        }
        self.column_id = column_id;
        self.updated_at = Utc::now();
        true
    }
}
