use crate::scheduler::SchedulerStatus;
use serde::Serialize;

/// Server status.
#[derive(Serialize, Debug, Clone)]
pub struct Status {
    /// Version of the server.
    pub version: String,
    /// Status of the reminders scheduler.
    pub scheduler: SchedulerStatus,
}
