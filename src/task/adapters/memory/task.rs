//! In-memory task repository shared across concurrent callers.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
};

/// Thread-safe in-memory task repository.
///
/// A single mutex guards the whole collection, so every operation is one
/// critical section and operations are linearizable with respect to each
/// other. Reads queue behind writes; there is no read/write split. Clones share
/// the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<Mutex<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when no task is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Each mutation is a single push, replace or remove, so a panic in another
    // holder cannot leave the vector half-updated.
    fn lock(&self) -> MutexGuard<'_, Vec<Task>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn position_of(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id() == id)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn add(&self, task: Task) {
        self.lock().push(task);
    }

    async fn get_all(&self) -> Vec<Task> {
        self.lock().clone()
    }

    async fn get_by_id(&self, id: TaskId) -> Option<Task> {
        self.lock().iter().find(|task| task.id() == id).cloned()
    }

    async fn update(&self, task: Task) -> bool {
        let mut tasks = self.lock();
        let id = task.id();
        match tasks.iter_mut().find(|stored| stored.id() == id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    async fn delete(&self, id: TaskId) -> bool {
        let mut tasks = self.lock();
        match position_of(&tasks, id) {
            Some(index) => {
                tasks.remove(index);
                true
            }
            None => false,
        }
    }
}
