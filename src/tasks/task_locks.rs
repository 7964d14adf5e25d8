use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

type TaskLocksMap = HashMap<Uuid, Arc<AsyncMutex<()>>>;

/// Serializes mutations of the same task, so that the task store and the delivery schedule are
/// always updated by one request at a time. Mutations of different tasks don't block each other.
#[derive(Default)]
pub struct TaskLocks {
    locks: Arc<Mutex<TaskLocksMap>>,
}

impl TaskLocks {
    /// Waits until no other mutation of the task is in progress. The task stays locked until the
    /// returned guard is dropped.
    pub async fn lock(&self, task_id: Uuid) -> TaskLockGuard {
        let task_lock = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(task_id)
            .or_default()
            .clone();

        TaskLockGuard {
            task_id,
            guard: Some(task_lock.lock_owned().await),
            locks: self.locks.clone(),
        }
    }

    /// Number of tasks that are currently locked or awaited.
    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

pub struct TaskLockGuard {
    task_id: Uuid,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<Mutex<TaskLocksMap>>,
}

impl Drop for TaskLockGuard {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        self.guard.take();

        // Lock handles are only cloned under the map lock, so if the map holds the last one,
        // nobody else is waiting for this task.
        if locks
            .get(&self.task_id)
            .is_some_and(|task_lock| Arc::strong_count(task_lock) == 1)
        {
            locks.remove(&self.task_id);
        }
    }
}
