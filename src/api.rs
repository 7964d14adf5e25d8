use crate::{
    database::Database,
    network::{MessageTransport, TelegramTransport},
    scheduler::Scheduler,
    tasks::{TaskLocks, TaskStore},
};
use tracing::info;

pub struct Api<TS: TaskStore = Database, MT: MessageTransport = TelegramTransport> {
    pub store: TS,
    pub scheduler: Scheduler<TS, MT>,
    pub(crate) task_locks: TaskLocks,
}

impl<TS: TaskStore, MT: MessageTransport> Api<TS, MT> {
    /// Instantiates APIs collection with the specified task store and scheduler.
    pub fn new(store: TS, scheduler: Scheduler<TS, MT>) -> Self {
        Self {
            store,
            scheduler,
            task_locks: TaskLocks::default(),
        }
    }

    /// Rebuilds the in-memory delivery schedule from the pending tasks persisted in the task
    /// store. Must be called once on startup, before any other task operation.
    pub async fn recover(&self) -> anyhow::Result<usize> {
        let pending_tasks = self.store.get_all_pending_tasks().await?;
        info!(
            "Found {} pending tasks that will be checked for delivery recovery.",
            pending_tasks.len()
        );

        let recovered = self.scheduler.recover(pending_tasks);
        info!("Recovery completed successfully ({recovered} deliveries scheduled).");

        Ok(recovered)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        tasks::{TaskStatus, TaskStore},
        tests::{mock_api, mock_now, mock_task, MockMessageTransport, MockTaskStore},
    };
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn recovers_pending_tasks_from_store() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let transport = MockMessageTransport::default();
        let api = mock_api(store.clone(), transport.clone())?;

        let now = mock_now()?;
        let future_task = mock_task(1, "Future", now + Duration::from_secs(60));
        let overdue_task = mock_task(1, "Overdue", now - Duration::from_secs(3600));
        let done_task = mock_task(1, "Done", now + Duration::from_secs(120));
        for task in [&future_task, &overdue_task, &done_task] {
            store.insert_task(task).await?;
        }
        store.mark_task_done(done_task.id).await?;
        assert_eq!(
            store.get_task(done_task.id).await?.map(|task| task.status),
            Some(TaskStatus::Done)
        );

        assert_eq!(api.recover().await?, 1);
        assert_eq!(
            api.scheduler.scheduled_at(future_task.id),
            Some(future_task.due_at)
        );
        assert!(api.scheduler.scheduled_at(overdue_task.id).is_none());
        assert!(api.scheduler.scheduled_at(done_task.id).is_none());

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_recover_if_store_is_unavailable() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let api = mock_api(store.clone(), MockMessageTransport::default())?;

        store.set_unavailable(true);
        assert!(api.recover().await.is_err());
        assert_eq!(api.scheduler.status().scheduled_deliveries, 0);

        Ok(())
    }
}
