//! Render-ready snapshot of the board.

use crate::{
    domain::{Board, Column, Task},
    drag::{DragSession, DragState},
};
use serde::Serialize;

/// Placeholder data for the item under the pointer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "entityKind", content = "data")]
pub enum DragPreview {
    Column(Column),
    Task(Task),
}

impl DragPreview {
    pub fn from_session(session: &DragSession) -> Option<Self> {
        match session.state() {
            DragState::Idle => None,
            DragState::DraggingColumn { column } => Some(Self::Column(column.clone())),
            DragState::DraggingTask { task, .. } => Some(Self::Task(task.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnView {
    pub column: Column,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub name: String,
    pub columns: Vec<ColumnView>,
    pub drag_preview: Option<DragPreview>,
}

impl BoardView {
    pub fn build(board: &Board, session: &DragSession) -> Self {
        let columns = board
            .columns()
            .iter()
            .map(|column| ColumnView {
                column: column.clone(),
                tasks: board.tasks_in_column(&column.id).cloned().collect(),
            })
            .collect();

        Self {
            name: board.config().name.clone(),
            columns,
            drag_preview: DragPreview::from_session(session),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
