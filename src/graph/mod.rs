pub mod task_dag;

pub use task_dag::{CycleDetected, TaskDag};
