use serde::Serialize;
use serde_with::{serde_as, skip_serializing_none, DurationMilliSeconds};
use std::time::Duration;

/// Scheduler status.
#[serde_as]
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerStatus {
    /// Number of reminders waiting to be delivered.
    pub scheduled_deliveries: usize,
    /// Indicates when the next reminder will be delivered. If there are no scheduled deliveries,
    /// this field is `None`.
    #[serde_as(as = "Option<DurationMilliSeconds<u64>>")]
    pub time_till_next_delivery: Option<Duration>,
}
