use crate::tasks::Task;
use time::OffsetDateTime;

/// Everything a scheduled delivery needs to re-validate the task when it fires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DeliveryPayload {
    /// Id of the chat user the reminder is sent to.
    pub owner: i64,
    /// Due time of the task at the moment the delivery was scheduled.
    pub expected_due_at: OffsetDateTime,
}

impl From<&Task> for DeliveryPayload {
    fn from(task: &Task) -> Self {
        Self {
            owner: task.owner,
            expected_due_at: task.due_at,
        }
    }
}
