//! Typed drag events.
//!
//! The drag-interaction layer reports start/over/end callbacks whose payloads
//! carry an entity kind tag, an id and a data snapshot. Raw JSON payloads are
//! checked here so the session controller only ever sees well-formed events.

use crate::{
    domain::{Column, ColumnId, RawId, Task, TaskId},
    error::{KanbanError, Result},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag attached to every draggable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Column,
    Task,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => write!(f, "Column"),
            Self::Task => write!(f, "Task"),
        }
    }
}

/// The item a drag event refers to, with the data it carried when the event fired
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Column(Column),
    Task(Task),
}

impl Descriptor {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Column(_) => EntityKind::Column,
            Self::Task(_) => EntityKind::Task,
        }
    }

    pub fn id_str(&self) -> &str {
        match self {
            Self::Column(column) => column.id.as_str(),
            Self::Task(task) => task.id.as_str(),
        }
    }
}

impl From<Column> for Descriptor {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Task> for Descriptor {
    fn from(task: Task) -> Self {
        Self::Task(task)
    }
}

/// One callback from the drag-interaction layer
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    Start {
        active: Descriptor,
    },
    Over {
        active: Descriptor,
        over: Option<Descriptor>,
    },
    End {
        active: Descriptor,
        over: Option<Descriptor>,
    },
}

impl DragEvent {
    pub fn start(active: impl Into<Descriptor>) -> Self {
        Self::Start {
            active: active.into(),
        }
    }

    pub fn over(active: impl Into<Descriptor>, over: Option<Descriptor>) -> Self {
        Self::Over {
            active: active.into(),
            over,
        }
    }

    pub fn end(active: impl Into<Descriptor>, over: Option<Descriptor>) -> Self {
        Self::End {
            active: active.into(),
            over,
        }
    }

    pub fn active(&self) -> &Descriptor {
        match self {
            Self::Start { active } | Self::Over { active, .. } | Self::End { active, .. } => {
                active
            }
        }
    }

    /// Decodes a JSON payload of the form
    /// `{"kind": "start"|"over"|"end", "active": {..}, "over": {..}|null}`.
    ///
    /// Ids may be JSON strings or integers; integers are kept in their
    /// decimal form.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawEvent = serde_json::from_str(json)
            .map_err(|e| KanbanError::MalformedEvent(e.to_string()))?;
        raw.try_into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    Start,
    Over,
    End,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescriptor {
    entity_kind: EntityKind,
    id: RawId,
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    kind: RawKind,
    active: RawDescriptor,
    #[serde(default)]
    over: Option<RawDescriptor>,
}

impl TryFrom<RawDescriptor> for Descriptor {
    type Error = KanbanError;

    fn try_from(raw: RawDescriptor) -> Result<Self> {
        let kind = raw.entity_kind;
        let raw_id = String::from(raw.id);
        let malformed = |reason: String| {
            KanbanError::MalformedEvent(format!("{} descriptor {:?}: {}", kind, raw_id, reason))
        };

        match kind {
            EntityKind::Column => {
                let id: ColumnId = raw_id
                    .parse()
                    .map_err(|e: KanbanError| malformed(e.to_string()))?;
                let column: Column =
                    serde_json::from_value(raw.data).map_err(|e| malformed(e.to_string()))?;
                if column.id != id {
                    return Err(malformed(format!("data carries id {:?}", column.id.as_str())));
                }
                Ok(Self::Column(column))
            }
            EntityKind::Task => {
                let id: TaskId = raw_id
                    .parse()
                    .map_err(|e: KanbanError| malformed(e.to_string()))?;
                let task: Task =
                    serde_json::from_value(raw.data).map_err(|e| malformed(e.to_string()))?;
                if task.id != id {
                    return Err(malformed(format!("data carries id {:?}", task.id.as_str())));
                }
                Ok(Self::Task(task))
            }
        }
    }
}

impl TryFrom<RawEvent> for DragEvent {
    type Error = KanbanError;

    fn try_from(raw: RawEvent) -> Result<Self> {
        let active = Descriptor::try_from(raw.active)?;
        let over = raw.over.map(Descriptor::try_from).transpose()?;

        Ok(match raw.kind {
            RawKind::Start => Self::Start { active },
            RawKind::Over => Self::Over { active, over },
            RawKind::End => Self::End { active, over },
        })
    }
}
