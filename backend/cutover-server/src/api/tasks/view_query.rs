use cutover_core::{Filter, SortConfig, SortDirection, SortKey, TaskFilters, TaskStatus, TaskType};

use serde::Deserialize;

/// `GET /api/tasks/view?type=prep&owner=all&status=todo&sort=start&direction=desc`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ViewQuery {
    #[serde(rename = "type")]
    pub task_type: Filter<TaskType>,
    pub owner: Filter<String>,
    pub status: Filter<TaskStatus>,
    pub sort: SortKey,
    pub direction: SortDirection,
}

impl ViewQuery {
    pub fn filters(&self) -> TaskFilters {
        TaskFilters {
            task_type: self.task_type.clone(),
            owner: self.owner.clone(),
            status: self.status.clone(),
        }
    }

    pub fn sort_config(&self) -> SortConfig {
        SortConfig::new(self.sort, self.direction)
    }
}
