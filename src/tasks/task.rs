use crate::tasks::TaskStatus;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// Defines a task the owner wants to be reminded about.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique id of the task.
    pub id: Uuid,
    /// Id of the chat user that owns the task and receives the reminder.
    pub owner: i64,
    /// Free-text title included into the reminder.
    pub title: String,
    /// The time at which the reminder should be delivered, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub due_at: OffsetDateTime,
    /// Current status of the task.
    pub status: TaskStatus,
    /// The time at which the task was created, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
