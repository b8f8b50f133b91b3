//! Persistence for the live task collection.
//!
//! Writes are whole-object upserts keyed by id, so concurrent writers
//! resolve as last write wins. Multi-row operations take a connection so
//! callers can group them in one transaction:
//!
//! ```ignore
//! let mut tx = pool.begin().await?;
//! TaskRepository::replace_all(&mut tx, &tasks).await?;
//! tx.commit().await?;
//! ```

use crate::{DbError, Result as DbErrorResult};

use cutover_core::{Task, TaskId, TaskStatus, TaskType, format_date, parse_date};

use std::str::FromStr;

use sqlx::SqliteConnection;

const SELECT_TASKS: &str = r#"
    SELECT
        id, name, owner, start_date, end_date, task_type, status,
        dependencies, sort_order, parent_id, is_expanded
    FROM tasks
"#;

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    name: String,
    owner: String,
    start_date: String,
    end_date: String,
    task_type: String,
    status: String,
    dependencies: String,
    sort_order: i64,
    parent_id: Option<i64>,
    is_expanded: bool,
}

impl TryFrom<TaskRow> for Task {
    type Error = DbError;

    fn try_from(row: TaskRow) -> DbErrorResult<Self> {
        let id = row.id;
        let invalid = |field: &str, e: &dyn std::fmt::Display| {
            DbError::invalid_data(format!("Invalid {} in task {}: {}", field, id, e))
        };

        Ok(Task {
            id,
            name: row.name,
            owner: row.owner,
            start: parse_date(&row.start_date).map_err(|e| invalid("start_date", &e))?,
            end: parse_date(&row.end_date).map_err(|e| invalid("end_date", &e))?,
            task_type: TaskType::from_str(&row.task_type).map_err(|e| invalid("task_type", &e))?,
            status: TaskStatus::from_str(&row.status).map_err(|e| invalid("status", &e))?,
            dependencies: serde_json::from_str(&row.dependencies)
                .map_err(|e| invalid("dependencies", &e))?,
            order: row.sort_order,
            parent_id: row.parent_id,
            is_expanded: row.is_expanded,
        })
    }
}

pub struct TaskRepository;

impl TaskRepository {
    /// All tasks by `order`, then id
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<TaskRow> = sqlx::query_as(&format!("{SELECT_TASKS} ORDER BY sort_order, id"))
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    pub async fn find_by_id<'e, E>(executor: E, id: TaskId) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<TaskRow> = sqlx::query_as(&format!("{SELECT_TASKS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(executor)
            .await?;

        row.map(Task::try_from).transpose()
    }

    pub async fn max_order<'e, E>(executor: E) -> DbErrorResult<Option<i64>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let max: Option<i64> = sqlx::query_scalar("SELECT MAX(sort_order) FROM tasks")
            .fetch_one(executor)
            .await?;

        Ok(max)
    }

    pub async fn max_id<'e, E>(executor: E) -> DbErrorResult<Option<TaskId>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let max: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM tasks")
            .fetch_one(executor)
            .await?;

        Ok(max)
    }

    /// Insert or fully replace by id
    pub async fn upsert<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let dependencies = serde_json::to_string(&task.dependencies)
            .map_err(|e| DbError::invalid_data(format!("Unencodable dependencies: {}", e)))?;

        sqlx::query(
            r#"
                INSERT INTO tasks (
                    id, name, owner, start_date, end_date, task_type, status,
                    dependencies, sort_order, parent_id, is_expanded
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    owner = excluded.owner,
                    start_date = excluded.start_date,
                    end_date = excluded.end_date,
                    task_type = excluded.task_type,
                    status = excluded.status,
                    dependencies = excluded.dependencies,
                    sort_order = excluded.sort_order,
                    parent_id = excluded.parent_id,
                    is_expanded = excluded.is_expanded
            "#,
        )
        .bind(task.id)
        .bind(&task.name)
        .bind(&task.owner)
        .bind(format_date(task.start))
        .bind(format_date(task.end))
        .bind(task.task_type.as_str())
        .bind(task.status.as_str())
        .bind(dependencies)
        .bind(task.order)
        .bind(task.parent_id)
        .bind(task.is_expanded)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn upsert_many(conn: &mut SqliteConnection, tasks: &[Task]) -> DbErrorResult<usize> {
        for task in tasks {
            Self::upsert(&mut *conn, task).await?;
        }
        Ok(tasks.len())
    }

    /// Returns true if a row was deleted
    pub async fn delete<'e, E>(executor: E, id: TaskId) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_many(conn: &mut SqliteConnection, ids: &[TaskId]) -> DbErrorResult<u64> {
        let mut deleted = 0;
        for &id in ids {
            if Self::delete(&mut *conn, id).await? {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    pub async fn delete_all<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tasks").execute(executor).await?;
        Ok(result.rows_affected())
    }

    /// Truncate, then insert `tasks`
    pub async fn replace_all(conn: &mut SqliteConnection, tasks: &[Task]) -> DbErrorResult<usize> {
        Self::delete_all(&mut *conn).await?;
        Self::upsert_many(conn, tasks).await
    }
}
