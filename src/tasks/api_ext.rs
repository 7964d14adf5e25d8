use crate::{
    api::Api,
    database::Database,
    error::Error as RemindrError,
    network::MessageTransport,
    scheduler::DeliveryPayload,
    tasks::{Task, TaskStatus, TaskStore},
};
use anyhow::bail;
use time::{OffsetDateTime, UtcOffset};
use tracing::{debug, info};
use uuid::Uuid;

/// Defines a maximum length of the task title.
const MAX_TASK_TITLE_LENGTH: usize = 1000;

/// Describes the API to work with tasks. Every mutation is persisted in the task store first, and
/// only then reflected in the delivery schedule. Mutations of the same task never overlap.
pub struct TasksApi<'a, TS: TaskStore, MT: MessageTransport> {
    api: &'a Api<TS, MT>,
}

impl<'a, TS: TaskStore, MT: MessageTransport> TasksApi<'a, TS, MT> {
    /// Creates Tasks API.
    pub fn new(api: &'a Api<TS, MT>) -> Self {
        Self { api }
    }

    /// Returns task by its ID.
    pub async fn get_task(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        self.api.store.get_task(id).await
    }

    /// Returns the pending task of the owner that is due the earliest.
    pub async fn get_nearest_task(&self, owner: i64) -> anyhow::Result<Option<Task>> {
        self.api.store.get_nearest_task(owner).await
    }

    /// Returns all pending tasks of the owner ordered by due time.
    pub async fn get_pending_tasks(&self, owner: i64) -> anyhow::Result<Vec<Task>> {
        self.api.store.get_pending_tasks(owner).await
    }

    /// Creates a new pending task and schedules a reminder for it.
    pub async fn create_task(
        &self,
        owner: i64,
        title: &str,
        due_at: OffsetDateTime,
    ) -> anyhow::Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            bail!(RemindrError::client("Task title cannot be empty."));
        }

        if title.chars().count() > MAX_TASK_TITLE_LENGTH {
            bail!(RemindrError::client(format!(
                "Task title cannot be longer than {MAX_TASK_TITLE_LENGTH} characters."
            )));
        }

        let now = Database::utc_now()?;
        let due_at = due_at.to_offset(UtcOffset::UTC).replace_nanosecond(0)?;
        if due_at <= now {
            bail!(RemindrError::client(format!(
                "Task due time ({due_at}) must be in the future."
            )));
        }

        let task = Task {
            id: Uuid::now_v7(),
            owner,
            title: title.to_string(),
            due_at,
            status: TaskStatus::Pending,
            created_at: now,
        };

        self.api.store.insert_task(&task).await?;
        self.api
            .scheduler
            .schedule(task.id, task.due_at, DeliveryPayload::from(&task));

        info!(task.id = %task.id, task.owner = owner, "Created a new task due at {due_at}.");

        Ok(task)
    }

    /// Moves the task to a new due time. The previously scheduled reminder is replaced, and the
    /// task becomes pending again even if it was already done.
    pub async fn postpone_task(&self, id: Uuid, due_at: OffsetDateTime) -> anyhow::Result<Task> {
        let _task_lock = self.api.task_locks.lock(id).await;
        let Some(task) = self.api.store.get_task(id).await? else {
            bail!(RemindrError::client(format!(
                "Task ('{id}') is not found."
            )));
        };

        let due_at = due_at.to_offset(UtcOffset::UTC).replace_nanosecond(0)?;
        if due_at <= Database::utc_now()? {
            bail!(RemindrError::client(format!(
                "Task due time ({due_at}) must be in the future."
            )));
        }

        self.api.store.update_task_due_at(id, due_at).await?;

        let previous_reminder_at = self.api.scheduler.scheduled_at(id);
        let task = Task {
            due_at,
            status: TaskStatus::Pending,
            ..task
        };
        self.api
            .scheduler
            .schedule(task.id, task.due_at, DeliveryPayload::from(&task));

        info!(
            task.id = %task.id,
            task.owner = task.owner,
            "Postponed task to {due_at} (previous reminder at {previous_reminder_at:?})."
        );

        Ok(task)
    }

    /// Marks the task as done and drops its pending reminder, if any.
    pub async fn complete_task(&self, id: Uuid) -> anyhow::Result<Task> {
        let _task_lock = self.api.task_locks.lock(id).await;
        let Some(task) = self.api.store.get_task(id).await? else {
            bail!(RemindrError::client(format!(
                "Task ('{id}') is not found."
            )));
        };

        if task.status == TaskStatus::Done {
            debug!(task.id = %id, "Task is already done.");
            return Ok(task);
        }

        self.api.store.mark_task_done(id).await?;
        // Delivery would be suppressed anyway, cancel it early to free the timer.
        self.api.scheduler.cancel(id);

        info!(task.id = %id, task.owner = task.owner, "Completed task.");

        Ok(Task {
            status: TaskStatus::Done,
            ..task
        })
    }
}

impl<TS: TaskStore, MT: MessageTransport> Api<TS, MT> {
    /// Returns an API to work with tasks.
    pub fn tasks(&self) -> TasksApi<'_, TS, MT> {
        TasksApi::new(self)
    }
}
