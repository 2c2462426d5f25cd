//! Identifier generation for new columns and tasks.
//!
//! A generator must never hand out an id that is still live for the same
//! entity kind. Both implementations here go further and never repeat within
//! a session at all.

use crate::domain::{column::ColumnId, task::TaskId};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

/// Source of fresh identifiers for the entity store
pub trait IdGenerator: Debug + Send + Sync {
    fn next_column_id(&mut self) -> ColumnId;

    fn next_task_id(&mut self) -> TaskId;
}

/// Wire form of an identifier: hosts may send a string or a plain integer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Which generator a board is built with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Random,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Sequential => Box::<SequentialIds>::default(),
            Self::Random => Box::new(RandomIds),
        }
    }
}

/// Per-kind counters starting at 1 (COL1, COL2, ... / TASK1, TASK2, ...)
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next_column: u64,
    next_task: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self {
            next_column: 1,
            next_task: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_column_id(&mut self) -> ColumnId {
        let id = ColumnId::new(self.next_column);
        self.next_column += 1;
        id
    }

    fn next_task_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_task);
        self.next_task += 1;
        id
    }
}

/// UUID v4 ids; collisions are negligible rather than impossible
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_column_id(&mut self) -> ColumnId {
        ColumnId::from_uuid(Uuid::new_v4())
    }

    fn next_task_id(&mut self) -> TaskId {
        TaskId::from_uuid(Uuid::new_v4())
    }
}

impl ColumnId {
    fn from_uuid(uuid: Uuid) -> Self {
        Self::from_raw(uuid.to_string())
    }
}

impl TaskId {
    fn from_uuid(uuid: Uuid) -> Self {
        Self::from_raw(uuid.to_string())
    }
}
