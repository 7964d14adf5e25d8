mod delivery_payload;
mod overdue_tasks_policy;
mod scheduler_status;

pub use self::{
    delivery_payload::DeliveryPayload, overdue_tasks_policy::OverdueTasksPolicy,
    scheduler_status::SchedulerStatus,
};
use crate::{
    config::SchedulerConfig,
    delivery::DeliveryExecutor,
    network::MessageTransport,
    tasks::{Task, TaskStatus, TaskStore},
};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};
use time::OffsetDateTime;
use tokio::task::AbortHandle;
use tracing::{debug, info};
use uuid::Uuid;

/// Delivery registered for a task and waiting for its time to come.
struct ScheduledDelivery {
    fire_at: OffsetDateTime,
    /// Distinguishes consecutive registrations for the same task.
    generation: u64,
    abort_handle: AbortHandle,
}

struct SchedulerInner<TS: TaskStore, MT: MessageTransport> {
    executor: DeliveryExecutor<TS, MT>,
    config: SchedulerConfig,
    deliveries: Mutex<HashMap<Uuid, ScheduledDelivery>>,
    next_generation: AtomicU64,
}

impl<TS: TaskStore, MT: MessageTransport> SchedulerInner<TS, MT> {
    fn deliveries(&self) -> MutexGuard<'_, HashMap<Uuid, ScheduledDelivery>> {
        // The map is always left consistent, it's safe to use even if another thread panicked.
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes the fired delivery from the schedule. Returns `false` if the delivery has been
    /// replaced or cancelled in the meantime and must not run.
    fn release(&self, task_id: Uuid, generation: u64) -> bool {
        let mut deliveries = self.deliveries();
        match deliveries.get(&task_id) {
            Some(delivery) if delivery.generation == generation => {
                deliveries.remove(&task_id);
                true
            }
            _ => false,
        }
    }
}

/// Keeps at most one pending reminder delivery per task. The schedule lives in memory only and is
/// rebuilt from the task store with `recover` on startup.
pub struct Scheduler<TS: TaskStore, MT: MessageTransport> {
    inner: Arc<SchedulerInner<TS, MT>>,
}

impl<TS: TaskStore, MT: MessageTransport> Clone for Scheduler<TS, MT> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<TS: TaskStore, MT: MessageTransport> Scheduler<TS, MT> {
    /// Creates a scheduler with an empty schedule.
    pub fn new(executor: DeliveryExecutor<TS, MT>, config: SchedulerConfig) -> Self {
        Self {
            inner: Arc::new(SchedulerInner {
                executor,
                config,
                deliveries: Mutex::new(HashMap::new()),
                next_generation: AtomicU64::new(0),
            }),
        }
    }

    /// Schedules delivery of the task reminder at `fire_at`, replacing any delivery previously
    /// scheduled for the same task. Deliveries scheduled in the past fire immediately. Must be
    /// called from within a Tokio runtime, the delivery timer is spawned onto it.
    pub fn schedule(&self, task_id: Uuid, fire_at: OffsetDateTime, payload: DeliveryPayload) {
        let delay = Duration::try_from(fire_at - OffsetDateTime::now_utc()).unwrap_or_default();
        let generation = self.inner.next_generation.fetch_add(1, Ordering::Relaxed);

        // Keep the lock until the new delivery is registered, otherwise an immediate delivery
        // could fire before it's in the schedule.
        let mut deliveries = self.inner.deliveries();
        if let Some(previous) = deliveries.remove(&task_id) {
            previous.abort_handle.abort();
            debug!(task.id = %task_id, "Replaced delivery scheduled at {}.", previous.fire_at);
        }

        let inner = self.inner.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !inner.release(task_id, generation) {
                return;
            }

            let outcome = inner.executor.deliver(task_id, payload).await;
            debug!(task.id = %task_id, outcome = ?outcome, "Delivery completed.");
        });

        deliveries.insert(
            task_id,
            ScheduledDelivery {
                fire_at,
                generation,
                abort_handle: handle.abort_handle(),
            },
        );

        debug!(
            task.id = %task_id,
            "Scheduled delivery at {fire_at} (in {}).",
            humantime::format_duration(delay)
        );
    }

    /// Cancels the delivery scheduled for the task, if any.
    pub fn cancel(&self, task_id: Uuid) {
        if let Some(delivery) = self.inner.deliveries().remove(&task_id) {
            delivery.abort_handle.abort();
            debug!(task.id = %task_id, "Cancelled delivery scheduled at {}.", delivery.fire_at);
        }
    }

    /// Schedules deliveries for the pending tasks loaded from the task store after restart, and
    /// returns the number of scheduled deliveries. Tasks that became due while the server was down
    /// are handled according to the configured `OverdueTasksPolicy`.
    pub fn recover(&self, tasks: Vec<Task>) -> usize {
        let now = OffsetDateTime::now_utc();
        let mut scheduled = 0;
        for task in tasks {
            if task.status != TaskStatus::Pending {
                continue;
            }

            if task.due_at <= now {
                match self.inner.config.overdue_tasks {
                    OverdueTasksPolicy::Skip => {
                        info!(task.id = %task.id, "Skipping reminder for the task overdue since {}.", task.due_at);
                        continue;
                    }
                    OverdueTasksPolicy::Deliver => {
                        info!(task.id = %task.id, "Delivering reminder for the task overdue since {}.", task.due_at);
                    }
                }
            }

            self.schedule(task.id, task.due_at, DeliveryPayload::from(&task));
            scheduled += 1;
        }

        scheduled
    }

    /// Returns the time at which the delivery for the task is scheduled, if any.
    pub fn scheduled_at(&self, task_id: Uuid) -> Option<OffsetDateTime> {
        self.inner
            .deliveries()
            .get(&task_id)
            .map(|delivery| delivery.fire_at)
    }

    /// Gets the status of the scheduler.
    pub fn status(&self) -> SchedulerStatus {
        let deliveries = self.inner.deliveries();
        let now = OffsetDateTime::now_utc();
        SchedulerStatus {
            scheduled_deliveries: deliveries.len(),
            time_till_next_delivery: deliveries
                .values()
                .map(|delivery| delivery.fire_at)
                .min()
                .map(|fire_at| Duration::try_from(fire_at - now).unwrap_or_default()),
        }
    }

    /// Cancels all scheduled deliveries.
    pub fn shutdown(&self) {
        let deliveries = self.inner.deliveries().drain().collect::<Vec<_>>();
        for (_, delivery) in &deliveries {
            delivery.abort_handle.abort();
        }

        info!(
            "Scheduler is stopped ({} pending deliveries cancelled).",
            deliveries.len()
        );
    }
}
