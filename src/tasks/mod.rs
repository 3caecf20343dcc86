//! Task tracking

pub mod task;

pub use task::{Task, TaskId, TaskTracker};
