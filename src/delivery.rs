mod delivery_outcome;

pub use self::delivery_outcome::{DeliveryOutcome, SuppressionReason};
use crate::{
    config::RemindersConfig,
    network::{InlineKeyboardMarkup, MessageTransport, OutgoingMessage},
    scheduler::DeliveryPayload,
    tasks::{Task, TaskStatus, TaskStore},
};
use handlebars::Handlebars;
use serde_json::json;
use std::time::Duration;
use time::macros::format_description;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Runs when a scheduled delivery fires. The task is always re-read from the store, the payload
/// only tells what the task looked like when the delivery was scheduled.
pub struct DeliveryExecutor<TS: TaskStore, MT: MessageTransport> {
    store: TS,
    transport: MT,
    templates: Handlebars<'static>,
    reminders: RemindersConfig,
    send_timeout: Duration,
}

impl<TS: TaskStore, MT: MessageTransport> DeliveryExecutor<TS, MT> {
    /// Creates a new delivery executor.
    pub fn new(
        store: TS,
        transport: MT,
        templates: Handlebars<'static>,
        reminders: RemindersConfig,
        send_timeout: Duration,
    ) -> Self {
        Self {
            store,
            transport,
            templates,
            reminders,
            send_timeout,
        }
    }

    /// Delivers the reminder for the task unless it's no longer relevant. Never fails, all errors
    /// are logged and reported as `DeliveryOutcome::Failed`.
    pub async fn deliver(&self, task_id: Uuid, payload: DeliveryPayload) -> DeliveryOutcome {
        let task = match self.store.get_task(task_id).await {
            Ok(Some(task)) => task,
            Ok(None) => {
                warn!(task.id = %task_id, "Task no longer exists, reminder is suppressed.");
                return DeliveryOutcome::Suppressed(SuppressionReason::TaskMissing);
            }
            Err(err) => {
                error!(task.id = %task_id, "Failed to retrieve task for reminder delivery: {err:?}");
                return DeliveryOutcome::Failed;
            }
        };

        if task.status != TaskStatus::Pending {
            info!(task.id = %task_id, task.status = task.status.as_str(), "Task is not pending anymore, reminder is suppressed.");
            return DeliveryOutcome::Suppressed(SuppressionReason::TaskNotPending);
        }

        if task.due_at != payload.expected_due_at {
            info!(
                task.id = %task_id,
                "Task was rescheduled from {} to {}, reminder is suppressed.",
                payload.expected_due_at, task.due_at
            );
            return DeliveryOutcome::Suppressed(SuppressionReason::TaskRescheduled);
        }

        let message = match self.render(&task) {
            Ok(text) => OutgoingMessage::text(payload.owner, text)
                .with_reply_markup(InlineKeyboardMarkup::task_actions(task.id)),
            Err(err) => {
                error!(task.id = %task_id, "Failed to render reminder: {err:?}");
                return DeliveryOutcome::Failed;
            }
        };

        match tokio::time::timeout(self.send_timeout, self.transport.send_message(message)).await {
            Ok(Ok(())) => {
                info!(task.id = %task_id, task.owner = payload.owner, "Sent task reminder.");
                DeliveryOutcome::Sent
            }
            Ok(Err(err)) => {
                error!(task.id = %task_id, task.owner = payload.owner, "Failed to send task reminder: {err:?}");
                DeliveryOutcome::Failed
            }
            Err(_) => {
                error!(
                    task.id = %task_id,
                    task.owner = payload.owner,
                    "Failed to send task reminder in {}.",
                    humantime::format_duration(self.send_timeout)
                );
                DeliveryOutcome::Failed
            }
        }
    }

    /// Renders the reminder text with the due time displayed in the configured offset.
    fn render(&self, task: &Task) -> anyhow::Result<String> {
        // E.g. `Sat, 01 Jan 2000 13:00`.
        let due_at = task.due_at.to_offset(self.reminders.utc_offset).format(
            format_description!("[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]"),
        )?;

        Ok(self.templates.render(
            "task_reminder",
            &json!({ "title": task.title, "due_at": due_at }),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::{DeliveryOutcome, SuppressionReason};
    use crate::{
        network::InlineKeyboardMarkup,
        scheduler::DeliveryPayload,
        tasks::TaskStore,
        tests::{mock_executor, mock_task, MockMessageTransport, MockTaskStore},
    };
    use std::time::Duration;
    use time::OffsetDateTime;

    #[tokio::test]
    async fn sends_rendered_reminder() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let transport = MockMessageTransport::default();
        let executor = mock_executor(store.clone(), transport.clone())?;

        let task = mock_task(
            42,
            "Buy milk",
            OffsetDateTime::from_unix_timestamp(946720800)?,
        );
        store.insert_task(&task).await?;

        assert_eq!(
            executor
                .deliver(task.id, DeliveryPayload::from(&task))
                .await,
            DeliveryOutcome::Sent
        );

        let messages = transport.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].chat_id, 42);
        assert_eq!(
            messages[0].text,
            "⏰ Reminder!\n\n📝 Buy milk\n⏰ Sat, 01 Jan 2000 13:00"
        );
        assert_eq!(
            messages[0].reply_markup,
            Some(InlineKeyboardMarkup::task_actions(task.id))
        );

        Ok(())
    }

    #[tokio::test]
    async fn suppresses_reminder_for_missing_task() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let transport = MockMessageTransport::default();
        let executor = mock_executor(store.clone(), transport.clone())?;

        let task = mock_task(
            42,
            "Buy milk",
            OffsetDateTime::from_unix_timestamp(946720800)?,
        );
        store.insert_task(&task).await?;
        store.remove_task(task.id);

        assert_eq!(
            executor
                .deliver(task.id, DeliveryPayload::from(&task))
                .await,
            DeliveryOutcome::Suppressed(SuppressionReason::TaskMissing)
        );
        assert!(transport.messages().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn suppresses_reminder_for_done_task() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let transport = MockMessageTransport::default();
        let executor = mock_executor(store.clone(), transport.clone())?;

        let task = mock_task(
            42,
            "Buy milk",
            OffsetDateTime::from_unix_timestamp(946720800)?,
        );
        store.insert_task(&task).await?;
        store.mark_task_done(task.id).await?;

        assert_eq!(
            executor
                .deliver(task.id, DeliveryPayload::from(&task))
                .await,
            DeliveryOutcome::Suppressed(SuppressionReason::TaskNotPending)
        );
        assert!(transport.messages().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn suppresses_reminder_for_rescheduled_task() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let transport = MockMessageTransport::default();
        let executor = mock_executor(store.clone(), transport.clone())?;

        let task = mock_task(
            42,
            "Buy milk",
            OffsetDateTime::from_unix_timestamp(946720800)?,
        );
        store.insert_task(&task).await?;
        store
            .update_task_due_at(task.id, OffsetDateTime::from_unix_timestamp(946724400)?)
            .await?;

        assert_eq!(
            executor
                .deliver(task.id, DeliveryPayload::from(&task))
                .await,
            DeliveryOutcome::Suppressed(SuppressionReason::TaskRescheduled)
        );
        assert!(transport.messages().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn fails_if_store_is_unavailable() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let transport = MockMessageTransport::default();
        let executor = mock_executor(store.clone(), transport.clone())?;

        let task = mock_task(
            42,
            "Buy milk",
            OffsetDateTime::from_unix_timestamp(946720800)?,
        );
        store.insert_task(&task).await?;
        store.set_unavailable(true);

        assert_eq!(
            executor
                .deliver(task.id, DeliveryPayload::from(&task))
                .await,
            DeliveryOutcome::Failed
        );
        assert!(transport.messages().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn fails_if_message_cannot_be_sent() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let transport = MockMessageTransport::default();
        let executor = mock_executor(store.clone(), transport.clone())?;

        let task = mock_task(
            42,
            "Buy milk",
            OffsetDateTime::from_unix_timestamp(946720800)?,
        );
        store.insert_task(&task).await?;
        transport.set_failing(true);

        assert_eq!(
            executor
                .deliver(task.id, DeliveryPayload::from(&task))
                .await,
            DeliveryOutcome::Failed
        );
        assert!(transport.messages().is_empty());

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn fails_if_message_send_times_out() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let transport = MockMessageTransport::default();
        let executor = mock_executor(store.clone(), transport.clone())?;

        let task = mock_task(
            42,
            "Buy milk",
            OffsetDateTime::from_unix_timestamp(946720800)?,
        );
        store.insert_task(&task).await?;
        transport.set_delay(Duration::from_secs(20));

        assert_eq!(
            executor
                .deliver(task.id, DeliveryPayload::from(&task))
                .await,
            DeliveryOutcome::Failed
        );
        assert!(transport.messages().is_empty());

        Ok(())
    }
}
