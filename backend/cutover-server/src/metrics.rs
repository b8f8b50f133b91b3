use crate::error::{Result as ServerErrorResult, ServerError};

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

const PREFIX: &str = "cutover";

/// Install the global Prometheus recorder
pub fn install_recorder() -> ServerErrorResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::metrics(format!("Failed to install recorder: {e}")))
}

/// Counters for task, snapshot and plan operations
pub struct Metrics;

impl Metrics {
    pub fn task_mutation(action: &'static str) {
        counter!(format!("{PREFIX}.tasks.mutations")).increment(1);
        counter!(format!("{PREFIX}.tasks.{action}")).increment(1);
    }

    pub fn snapshot_operation(action: &'static str) {
        counter!(format!("{PREFIX}.snapshots.{action}")).increment(1);
    }

    pub fn plan_generated(accepted: usize, quarantined: usize) {
        counter!(format!("{PREFIX}.plans.generated")).increment(1);
        counter!(format!("{PREFIX}.plans.tasks_accepted")).increment(accepted as u64);
        counter!(format!("{PREFIX}.plans.tasks_quarantined")).increment(quarantined as u64);
    }

    pub fn plan_failed() {
        counter!(format!("{PREFIX}.plans.failed")).increment(1);
    }
}
