//! # Kanban DnD Core
//!
//! In-memory state for a single-user kanban board: an entity store holding
//! ordered columns and tasks, and a drag session controller that turns
//! drag-and-drop callbacks into reorders and cross-column moves.
//!
//! Rendering, inline editing and pointer capture belong to the host UI. It
//! forwards user intents to [`Board`] and drag callbacks to [`DragSession`],
//! then re-renders from [`BoardView`].

pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod view;

// Re-export commonly used types
pub use config::BoardConfig;
pub use domain::{
    board::Board,
    column::{Column, ColumnId},
    ids::{IdGenerator, IdStrategy},
    task::{Task, TaskId},
};
pub use drag::{Descriptor, DragEvent, DragSession, DragState, EntityKind};
pub use error::{KanbanError, Result};
pub use view::{BoardView, ColumnView, DragPreview};
