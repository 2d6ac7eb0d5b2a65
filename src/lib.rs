pub mod calculations;
pub mod calendar;
pub mod edit;
pub mod graph;
pub mod persistence;
pub mod task;
pub mod task_validation;

pub use calculations::recalculate;
pub use calendar::WorkdayCalendar;
pub use edit::{move_task, resize_end, resize_start};
pub use graph::{CycleDetected, TaskDag};
pub use task::{Task, TaskStatus};
