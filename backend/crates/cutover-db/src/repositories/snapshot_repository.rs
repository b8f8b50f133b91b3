use crate::{DbError, Result as DbErrorResult};

use cutover_core::{Snapshot, SnapshotSummary, Task};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    task_count: i64,
}

#[derive(sqlx::FromRow)]
struct SnapshotRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    tasks: String,
}

pub struct SnapshotRepository {
    pool: SqlitePool,
}

impl SnapshotRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a snapshot; returns its new id
    pub async fn create(&self, snapshot: &Snapshot) -> DbErrorResult<i64> {
        let tasks = serde_json::to_string(&snapshot.tasks)
            .map_err(|e| DbError::invalid_data(format!("Unencodable snapshot tasks: {}", e)))?;

        let result = sqlx::query(
            r#"
                INSERT INTO snapshots (name, created_at, task_count, tasks)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&snapshot.name)
        .bind(snapshot.created_at)
        .bind(snapshot.tasks.len() as i64)
        .bind(tasks)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Summaries, newest first
    pub async fn find_all(&self) -> DbErrorResult<Vec<SnapshotSummary>> {
        let rows: Vec<SummaryRow> = sqlx::query_as(
            r#"
                SELECT id, name, created_at, task_count
                FROM snapshots
                ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| SnapshotSummary {
                id: Some(r.id),
                name: r.name,
                created_at: r.created_at,
                task_count: r.task_count.max(0) as usize,
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Snapshot>> {
        let row: Option<SnapshotRow> =
            sqlx::query_as("SELECT id, name, created_at, tasks FROM snapshots WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|r| {
            let tasks: Vec<Task> = serde_json::from_str(&r.tasks).map_err(|e| {
                DbError::invalid_data(format!("Invalid tasks in snapshot {}: {}", r.id, e))
            })?;

            Ok(Snapshot {
                id: Some(r.id),
                name: r.name,
                created_at: r.created_at,
                tasks,
            })
        })
        .transpose()
    }

    /// Returns true if a snapshot was deleted
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM snapshots WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
