use serde::Deserialize;
use time::OffsetDateTime;

/// Parameters for creating a task.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateParams {
    /// Id of the chat user that owns the task.
    pub owner: i64,
    /// Task title.
    pub title: String,
    /// The time at which the reminder should be delivered.
    #[serde(with = "time::serde::rfc3339")]
    pub due_at: OffsetDateTime,
}
