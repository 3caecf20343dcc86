//! Task tracking
//!
//! The to-do list the whole game hangs off: tasks are appended, marked
//! complete exactly once, and never deleted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

/// Unique task id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single real-world task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, non-empty description
    pub description: String,
    /// Monotone: once true, never reverts
    pub completed: bool,
}

/// Owns the ordered task list and completion state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskTracker {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskTracker {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new incomplete task. The description is trimmed;
    /// empty or whitespace-only input is rejected without any change.
    pub fn add(&mut self, description: &str) -> Result<TaskId, ActionError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ActionError::EmptyDescription);
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            description: description.to_string(),
            completed: false,
        });
        Ok(id)
    }

    /// Mark a task complete. Fails on unknown ids and on tasks that are
    /// already done, so a completion can only ever happen once per task.
    pub fn complete(&mut self, id: TaskId) -> Result<&Task, ActionError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ActionError::UnknownTask(id))?;
        if task.completed {
            return Err(ActionError::AlreadyCompleted(id));
        }
        task.completed = true;
        Ok(task)
    }

    /// Get a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in creation order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_description() {
        let mut tracker = TaskTracker::new();
        let id = tracker.add("  clean desk  ").unwrap();
        assert_eq!(tracker.get(id).unwrap().description, "clean desk");
    }

    #[test]
    fn test_add_rejects_blank_input() {
        let mut tracker = TaskTracker::new();
        assert_eq!(tracker.add(""), Err(ActionError::EmptyDescription));
        assert_eq!(tracker.add("   "), Err(ActionError::EmptyDescription));
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut tracker = TaskTracker::new();
        let a = tracker.add("one").unwrap();
        let b = tracker.add("two").unwrap();
        assert!(a < b);
        assert_eq!(tracker.count(), 2);
    }

    #[test]
    fn test_complete_is_one_shot() {
        let mut tracker = TaskTracker::new();
        let id = tracker.add("laundry").unwrap();

        assert!(tracker.complete(id).is_ok());
        assert!(tracker.get(id).unwrap().completed);
        assert_eq!(tracker.complete(id), Err(ActionError::AlreadyCompleted(id)));
    }

    #[test]
    fn test_complete_unknown_id() {
        let mut tracker = TaskTracker::new();
        assert_eq!(
            tracker.complete(TaskId(99)),
            Err(ActionError::UnknownTask(TaskId(99)))
        );
    }
}
