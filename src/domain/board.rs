use crate::config::BoardConfig;
use crate::domain::{
    column::{Column, ColumnId},
    ids::IdGenerator,
    ordering::{position_of, relocate},
    task::{Task, TaskId},
};
use tracing::debug;

/// In-memory kanban board state.
///
/// Columns and tasks are kept as two ordered sequences. A task's place inside
/// its column is derived from its place in the single global `tasks` sequence,
/// so there is no per-column index to keep in sync.
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    columns: Vec<Column>,
    tasks: Vec<Task>,
    ids: Box<dyn IdGenerator>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let ids = config.id_strategy.generator();
        Self::with_ids(config, ids)
    }

    /// Builds a board that draws identifiers from `ids`
    pub fn with_ids(config: BoardConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            config,
            columns: Vec::new(),
            tasks: Vec::new(),
            ids,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All tasks in global order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Column ids in display order
    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|col| col.id.clone()).collect()
    }

    /// Tasks owned by `column_id`, in the order they appear on screen
    pub fn tasks_in_column<'a>(
        &'a self,
        column_id: &'a ColumnId,
    ) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |task| &task.column_id == column_id)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Appends a column titled "{prefix} {n}", n being the column count plus one.
    ///
    /// The number is cosmetic and repeats after deletes; the id does not.
    pub fn create_column(&mut self) -> &Column {
        let id = self.ids.next_column_id();
        let title = format!("{} {}", self.config.column_title_prefix, self.columns.len() + 1);
        debug!(column = %id, %title, "Creating column");

        self.columns.push(Column::new(id, title));
        &self.columns[self.columns.len() - 1]
    }

    /// Removes a column together with every task it owns
    pub fn delete_column(&mut self, id: &ColumnId) -> Option<Column> {
        let index = position_of(&self.columns, |col| &col.id == id)?;
        let column = self.columns.remove(index);

        let before = self.tasks.len();
        self.tasks.retain(|task| &task.column_id != id);
        debug!(column = %id, removed_tasks = before - self.tasks.len(), "Deleted column");

        Some(column)
    }

    pub fn rename_column(&mut self, id: &ColumnId, title: impl Into<String>) -> bool {
        match self.columns.iter_mut().find(|col| &col.id == id) {
            Some(column) => {
                column.set_title(title.into());
                debug!(column = %id, title = %column.title, "Renamed column");
                true
            }
            None => false,
        }
    }

    /// Appends a task titled "{prefix} {n}", n being the total task count plus one.
    ///
    /// Assumes `column_id` names a live column. The caller picks it from the
    /// rendered column list, so it is not checked here; a stale id leaves a
    /// task that no column view will show.
    pub fn create_task(&mut self, column_id: ColumnId) -> &Task {
        let id = self.ids.next_task_id();
        let content = format!("{} {}", self.config.task_content_prefix, self.tasks.len() + 1);
        debug!(task = %id, column = %column_id, %content, "Creating task");

        self.tasks.push(Task::new(id, column_id, content));
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn delete_task(&mut self, id: &TaskId) -> Option<Task> {
        let index = position_of(&self.tasks, |task| &task.id == id)?;
        debug!(task = %id, "Deleted task");
        Some(self.tasks.remove(index))
    }

    pub fn rename_task(&mut self, id: &TaskId, content: impl Into<String>) -> bool {
        match self.tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) => {
                task.set_content(content.into());
                debug!(task = %id, "Updated task content");
                true
            }
            None => false,
        }
    }

    /// Moves column `active` into the slot currently held by column `over`.
    ///
    /// No-op when the ids are equal or either column is missing.
    pub fn move_column(&mut self, active: &ColumnId, over: &ColumnId) -> bool {
        if active == over {
            return false;
        }
        let (Some(from), Some(to)) = (
            position_of(&self.columns, |col| &col.id == active),
            position_of(&self.columns, |col| &col.id == over),
        ) else {
            return false;
        };

        let moved = relocate(&mut self.columns, from, to);
        if moved {
            debug!(column = %active, from, to, "Moved column");
        }
        moved
    }

    /// Moves task `active` into the slot currently held by task `over`,
    /// handing it to `over`'s column first when the two differ.
    ///
    /// No-op when the ids are equal or either task is missing.
    pub fn move_task(&mut self, active: &TaskId, over: &TaskId) -> bool {
        if active == over {
            return false;
        }
        let (Some(from), Some(to)) = (
            position_of(&self.tasks, |task| &task.id == active),
            position_of(&self.tasks, |task| &task.id == over),
        ) else {
            return false;
        };

        let target_column = self.tasks[to].column_id.clone();
        let mut task = self.tasks.remove(from);
        let reassigned = task.reassign(target_column);
        self.tasks.insert(to, task);

        debug!(task = %active, from, to, reassigned, "Moved task");
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
