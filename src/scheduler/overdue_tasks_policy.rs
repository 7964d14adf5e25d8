use serde::{Deserialize, Serialize};

/// Defines how pending tasks that became due while the server was down are handled on startup.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverdueTasksPolicy {
    /// Overdue tasks are left pending, but their reminders are never sent.
    #[default]
    Skip,
    /// Reminders for overdue tasks are sent right away.
    Deliver,
}
