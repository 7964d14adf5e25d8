/// Result of a single reminder delivery attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Reminder was sent to the owner.
    Sent,
    /// Reminder is no longer relevant and was intentionally not sent.
    Suppressed(SuppressionReason),
    /// Reminder couldn't be sent, the failure is logged and isn't retried.
    Failed,
}

/// Explains why a reminder was suppressed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SuppressionReason {
    /// Task doesn't exist anymore.
    TaskMissing,
    /// Task isn't pending anymore.
    TaskNotPending,
    /// Task was moved to another due time after the delivery had been scheduled.
    TaskRescheduled,
}
