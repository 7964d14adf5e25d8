use serde::Deserialize;
use time::OffsetDateTime;

/// Parameters for postponing a task.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskPostponeParams {
    /// The new time at which the reminder should be delivered.
    #[serde(with = "time::serde::rfc3339")]
    pub due_at: OffsetDateTime,
}
