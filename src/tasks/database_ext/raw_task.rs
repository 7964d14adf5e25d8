use crate::tasks::{Task, TaskStatus};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(FromRow, Debug, Eq, PartialEq, Clone)]
pub(super) struct RawTask {
    pub id: String,
    pub user_id: i64,
    pub title: String,
    pub due_at: i64,
    pub status: String,
    pub created_at: i64,
}

impl TryFrom<RawTask> for Task {
    type Error = anyhow::Error;

    fn try_from(raw_task: RawTask) -> Result<Self, Self::Error> {
        Ok(Task {
            id: Uuid::parse_str(&raw_task.id)?,
            owner: raw_task.user_id,
            title: raw_task.title,
            due_at: OffsetDateTime::from_unix_timestamp(raw_task.due_at)?,
            status: TaskStatus::try_from(raw_task.status.as_str())?,
            created_at: OffsetDateTime::from_unix_timestamp(raw_task.created_at)?,
        })
    }
}

impl TryFrom<&Task> for RawTask {
    type Error = anyhow::Error;

    fn try_from(task: &Task) -> Result<Self, Self::Error> {
        Ok(RawTask {
            id: task.id.to_string(),
            user_id: task.owner,
            title: task.title.clone(),
            due_at: task.due_at.unix_timestamp(),
            status: task.status.as_str().to_string(),
            created_at: task.created_at.unix_timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RawTask;
    use crate::tasks::{Task, TaskStatus};
    use time::OffsetDateTime;
    use uuid::uuid;

    #[test]
    fn can_convert_to_task() -> anyhow::Result<()> {
        assert_eq!(
            Task::try_from(RawTask {
                id: "00000000-0000-0000-0000-000000000001".to_string(),
                user_id: 42,
                title: "Buy milk".to_string(),
                due_at: 946720800,
                status: "done".to_string(),
                created_at: 946717200,
            })?,
            Task {
                id: uuid!("00000000-0000-0000-0000-000000000001"),
                owner: 42,
                title: "Buy milk".to_string(),
                due_at: OffsetDateTime::from_unix_timestamp(946720800)?,
                status: TaskStatus::Done,
                created_at: OffsetDateTime::from_unix_timestamp(946717200)?,
            }
        );

        Ok(())
    }

    #[test]
    fn fails_to_convert_malformed_rows() {
        let raw_task = RawTask {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            user_id: 42,
            title: "Buy milk".to_string(),
            due_at: 946720800,
            status: "pending".to_string(),
            created_at: 946717200,
        };

        assert!(Task::try_from(RawTask {
            id: "not-a-uuid".to_string(),
            ..raw_task.clone()
        })
        .is_err());
        assert!(Task::try_from(RawTask {
            status: "unknown".to_string(),
            ..raw_task
        })
        .is_err());
    }

    #[test]
    fn can_convert_into_raw_task() -> anyhow::Result<()> {
        assert_eq!(
            RawTask::try_from(&Task {
                id: uuid!("00000000-0000-0000-0000-000000000001"),
                owner: 42,
                title: "Buy milk".to_string(),
                due_at: OffsetDateTime::from_unix_timestamp(946720800)?,
                status: TaskStatus::Pending,
                created_at: OffsetDateTime::from_unix_timestamp(946717200)?,
            })?,
            RawTask {
                id: "00000000-0000-0000-0000-000000000001".to_string(),
                user_id: 42,
                title: "Buy milk".to_string(),
                due_at: 946720800,
                status: "pending".to_string(),
                created_at: 946717200,
            }
        );

        Ok(())
    }
}
