//! Drag session controller.
//!
//! Interprets start/over/end events against the current board and commits
//! reorders and cross-column moves. Lookups that miss, self-drops and drops
//! with no target are all silent no-ops: a stale event must never corrupt the
//! board.

use crate::{
    domain::{Board, Column, Task, TaskId},
    drag::event::{Descriptor, DragEvent},
};
use tracing::{debug, trace, warn};

/// Where the current drag session stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn {
        /// Last known data of the dragged column, for the drag preview
        column: Column,
    },
    DraggingTask {
        /// Last known data of the dragged task, for the drag preview
        task: Task,
        /// Task the last applied drag-over moved onto, while still hovered
        hovered: Option<TaskId>,
    },
}

#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// The column being dragged, if any
    pub fn active_column(&self) -> Option<&Column> {
        match &self.state {
            DragState::DraggingColumn { column } => Some(column),
            _ => None,
        }
    }

    /// The task being dragged, if any
    pub fn active_task(&self) -> Option<&Task> {
        match &self.state {
            DragState::DraggingTask { task, .. } => Some(task),
            _ => None,
        }
    }

    /// Routes an event to its handler. Returns whether the board changed.
    pub fn dispatch(&mut self, board: &mut Board, event: DragEvent) -> bool {
        match event {
            DragEvent::Start { active } => {
                self.on_drag_start(active);
                false
            }
            DragEvent::Over { active, over } => self.on_drag_over(board, &active, over.as_ref()),
            DragEvent::End { active, over } => self.on_drag_end(board, &active, over.as_ref()),
        }
    }

    /// Begins a session. Ignored unless the controller is idle.
    pub fn on_drag_start(&mut self, active: Descriptor) {
        if self.is_dragging() {
            warn!(active = %active.id_str(), "Drag start while a drag is in progress, ignoring");
            return;
        }

        self.state = match active {
            Descriptor::Column(column) => {
                debug!(column = %column.id, "Drag started on column");
                DragState::DraggingColumn { column }
            }
            Descriptor::Task(task) => {
                debug!(task = %task.id, "Drag started on task");
                DragState::DraggingTask {
                    task,
                    hovered: None,
                }
            }
        };
    }

    /// Live reassignment while hovering: only the dragged task over another
    /// task mutates the board. Columns reorder on drop only, and hovers that
    /// arrive outside a task drag are ignored.
    pub fn on_drag_over(
        &mut self,
        board: &mut Board,
        active: &Descriptor,
        over: Option<&Descriptor>,
    ) -> bool {
        trace!(active = %active.id_str(), over = ?over.map(Descriptor::id_str), "Drag over");

        let Some((active_id, over_id)) = task_pair(active, over) else {
            self.clear_hovered();
            return false;
        };

        if self.active_task().map(|task| &task.id) != Some(active_id) {
            trace!(active = %active_id, "Drag over outside a matching task drag, ignoring");
            return false;
        }

        if self.is_hovering(active_id, over_id) {
            return false;
        }

        let moved = board.move_task(active_id, over_id);
        if moved {
            self.refresh_task_preview(board, active_id);
        }
        if let DragState::DraggingTask { hovered, .. } = &mut self.state {
            *hovered = moved.then(|| over_id.clone());
        }
        moved
    }

    /// Ends the session and commits the drop. The controller is always idle
    /// afterwards, whatever the outcome.
    pub fn on_drag_end(
        &mut self,
        board: &mut Board,
        active: &Descriptor,
        over: Option<&Descriptor>,
    ) -> bool {
        let already_committed = match task_pair(active, over) {
            Some((active_id, over_id)) => self.is_hovering(active_id, over_id),
            None => false,
        };
        let previous = std::mem::take(&mut self.state);
        debug!(
            active = %active.id_str(),
            over = ?over.map(Descriptor::id_str),
            was_dragging = !matches!(previous, DragState::Idle),
            "Drag ended"
        );

        let Some(over) = over else {
            return false;
        };

        match (active, over) {
            (Descriptor::Column(active), Descriptor::Column(over)) => {
                board.move_column(&active.id, &over.id)
            }
            (Descriptor::Task(active), Descriptor::Task(over)) if !already_committed => {
                board.move_task(&active.id, &over.id)
            }
            _ => false,
        }
    }

    fn is_hovering(&self, active_id: &TaskId, over_id: &TaskId) -> bool {
        matches!(
            &self.state,
            DragState::DraggingTask { task, hovered: Some(hovered) }
                if &task.id == active_id && hovered == over_id
        )
    }

    fn clear_hovered(&mut self) {
        if let DragState::DraggingTask { hovered, .. } = &mut self.state {
            *hovered = None;
        }
    }

    fn refresh_task_preview(&mut self, board: &Board, id: &TaskId) {
        if let DragState::DraggingTask { task, .. } = &mut self.state {
            if &task.id == id {
                if let Some(current) = board.task(id) {
                    *task = current.clone();
                }
            }
        }
    }
}

/// Both ids when `active` and `over` are two distinct tasks
fn task_pair<'a>(
    active: &'a Descriptor,
    over: Option<&'a Descriptor>,
) -> Option<(&'a TaskId, &'a TaskId)> {
    match (active, over?) {
        (Descriptor::Task(active), Descriptor::Task(over)) if active.id != over.id => {
            Some((&active.id, &over.id))
        }
        _ => None,
    }
}
