//! Action errors
//!
//! Every declined intent maps to one of these. None are fatal: the core
//! never mutates state on the error path.

use thiserror::Error;

use crate::items::ItemId;
use crate::tasks::TaskId;

/// Why an intent was declined. State is unchanged whenever one of these
/// is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Task description was empty or whitespace-only after trimming
    #[error("task description is empty")]
    EmptyDescription,

    /// No task with this id exists
    #[error("no task with id {0}")]
    UnknownTask(TaskId),

    /// The task was already completed
    #[error("task {0} is already completed")]
    AlreadyCompleted(TaskId),

    /// The item is not in the inventory
    #[error("item {0} is not in the inventory")]
    ItemNotFound(ItemId),

    /// Not enough gold to cover a cost
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },
}
