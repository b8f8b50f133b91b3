use crate::PlanGenerator;

use cutover_config::ViewConfig;
use cutover_core::{TaskIdGenerator, TaskNotifier};
use cutover_db::TaskRepository;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;
use tokio::sync::watch;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Publishes the full collection after every mutation (SSE feed)
    pub notifier: TaskNotifier,
    pub ids: Arc<TaskIdGenerator>,
    pub view: ViewConfig,
    /// `None` when plan generation is disabled
    pub plan_generator: Option<Arc<dyn PlanGenerator>>,
    pub plan_max_tasks: usize,
    /// `None` when no recorder is installed
    pub metrics: Option<PrometheusHandle>,
    /// Flips to `true` on shutdown so SSE streams end
    pub shutdown: watch::Receiver<bool>,
}

impl AppState {
    /// Resolves once shutdown starts; never, if nobody can signal it
    pub async fn shutdown_started(&self) {
        let mut shutdown = self.shutdown.clone();
        if shutdown.wait_for(|started| *started).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    /// Re-read the collection and push it to every subscriber
    pub async fn publish_tasks(&self) -> cutover_db::Result<()> {
        let tasks = TaskRepository::find_all(&self.pool).await?;
        self.notifier.publish(tasks);
        Ok(())
    }
}
