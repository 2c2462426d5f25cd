pub mod board;
pub mod column;
pub mod ids;
pub mod ordering;
pub mod task;

pub use board::Board;
pub use column::{Column, ColumnId};
pub use ids::{IdGenerator, IdStrategy, RandomIds, RawId, SequentialIds};
pub use ordering::relocate;
pub use task::{Task, TaskId};
