use crate::scheduler::OverdueTasksPolicy;
use serde::{Deserialize, Serialize};

/// Configuration for the reminder scheduler.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Defines what happens at startup to pending tasks whose due time passed while the server
    /// was down.
    pub overdue_tasks: OverdueTasksPolicy,
}
