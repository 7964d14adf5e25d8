mod raw_task;

use crate::{
    database::Database,
    tasks::{database_ext::raw_task::RawTask, Task, TaskStatus, TaskStore},
};
use sqlx::{query, query_as};
use time::OffsetDateTime;
use uuid::Uuid;

/// Extends primary database with the tasks-related methods.
impl TaskStore for Database {
    async fn insert_task(&self, task: &Task) -> anyhow::Result<()> {
        let raw_task = RawTask::try_from(task)?;
        query(
            r#"INSERT INTO tasks (id, user_id, title, due_at, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
        )
        .bind(raw_task.id)
        .bind(raw_task.user_id)
        .bind(raw_task.title)
        .bind(raw_task.due_at)
        .bind(raw_task.status)
        .bind(raw_task.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_task(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        query_as::<_, RawTask>(r#"SELECT * FROM tasks WHERE id = ?1"#)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .map(Task::try_from)
            .transpose()
    }

    async fn get_nearest_task(&self, owner: i64) -> anyhow::Result<Option<Task>> {
        query_as::<_, RawTask>(
            r#"SELECT * FROM tasks WHERE user_id = ?1 AND status = ?2 ORDER BY due_at, id LIMIT 1"#,
        )
        .bind(owner)
        .bind(TaskStatus::Pending.as_str())
        .fetch_optional(&self.pool)
        .await?
        .map(Task::try_from)
        .transpose()
    }

    async fn get_pending_tasks(&self, owner: i64) -> anyhow::Result<Vec<Task>> {
        query_as::<_, RawTask>(
            r#"SELECT * FROM tasks WHERE user_id = ?1 AND status = ?2 ORDER BY due_at, id"#,
        )
        .bind(owner)
        .bind(TaskStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Task::try_from)
        .collect()
    }

    async fn get_all_pending_tasks(&self) -> anyhow::Result<Vec<Task>> {
        query_as::<_, RawTask>(r#"SELECT * FROM tasks WHERE status = ?1 ORDER BY due_at, id"#)
            .bind(TaskStatus::Pending.as_str())
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Task::try_from)
            .collect()
    }

    async fn update_task_due_at(&self, id: Uuid, due_at: OffsetDateTime) -> anyhow::Result<()> {
        query(r#"UPDATE tasks SET due_at = ?2, status = ?3 WHERE id = ?1"#)
            .bind(id.to_string())
            .bind(due_at.unix_timestamp())
            .bind(TaskStatus::Pending.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn mark_task_done(&self, id: Uuid) -> anyhow::Result<()> {
        query(r#"UPDATE tasks SET status = ?2 WHERE id = ?1"#)
            .bind(id.to_string())
            .bind(TaskStatus::Done.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
