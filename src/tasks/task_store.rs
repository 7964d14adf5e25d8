use crate::tasks::Task;
use std::future::Future;
use time::OffsetDateTime;
use uuid::Uuid;

/// Durable storage of tasks. The store is the single source of truth for the task state, the
/// scheduler only keeps ephemeral data that can be rebuilt from the store at any time.
pub trait TaskStore: Clone + Send + Sync + 'static {
    /// Persists a new task.
    fn insert_task(&self, task: &Task) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Retrieves task using its ID.
    fn get_task(&self, id: Uuid) -> impl Future<Output = anyhow::Result<Option<Task>>> + Send;

    /// Retrieves the pending task of the specified owner that is due the earliest.
    fn get_nearest_task(
        &self,
        owner: i64,
    ) -> impl Future<Output = anyhow::Result<Option<Task>>> + Send;

    /// Retrieves all pending tasks of the specified owner ordered by due time.
    fn get_pending_tasks(&self, owner: i64)
        -> impl Future<Output = anyhow::Result<Vec<Task>>> + Send;

    /// Retrieves pending tasks of all owners ordered by due time.
    fn get_all_pending_tasks(&self) -> impl Future<Output = anyhow::Result<Vec<Task>>> + Send;

    /// Moves the task to a new due time and makes it pending again.
    fn update_task_due_at(
        &self,
        id: Uuid,
        due_at: OffsetDateTime,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Marks the task as done.
    fn mark_task_done(&self, id: Uuid) -> impl Future<Output = anyhow::Result<()>> + Send;
}
