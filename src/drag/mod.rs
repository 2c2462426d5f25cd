pub mod event;
pub mod session;

pub use event::{Descriptor, DragEvent, EntityKind};
pub use session::{DragSession, DragState};
