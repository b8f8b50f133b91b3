//! The plan restored by "reset to default".

use crate::{Task, TaskId, TaskStatus, TaskType};

use chrono::NaiveDate;

struct Seed {
    id: TaskId,
    name: &'static str,
    owner: &'static str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    task_type: TaskType,
    dependencies: &'static [TaskId],
    parent_id: Option<TaskId>,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        name: "Preparation Phase",
        owner: "PMO",
        start: (2025, 3, 24),
        end: (2025, 4, 4),
        task_type: TaskType::Preparation,
        dependencies: &[],
        parent_id: None,
    },
    Seed {
        id: 2,
        name: "Data mapping sign-off",
        owner: "Data Team",
        start: (2025, 3, 24),
        end: (2025, 3, 28),
        task_type: TaskType::Preparation,
        dependencies: &[],
        parent_id: Some(1),
    },
    Seed {
        id: 3,
        name: "Mock migration run",
        owner: "Data Team",
        start: (2025, 3, 31),
        end: (2025, 4, 3),
        task_type: TaskType::Preparation,
        dependencies: &[2],
        parent_id: Some(1),
    },
    Seed {
        id: 4,
        name: "Upstream interface freeze",
        owner: "Integration",
        start: (2025, 4, 3),
        end: (2025, 4, 4),
        task_type: TaskType::UpstreamIntegration,
        dependencies: &[],
        parent_id: None,
    },
    Seed {
        id: 5,
        name: "Cutover Weekend",
        owner: "Cutover Lead",
        start: (2025, 4, 5),
        end: (2025, 4, 6),
        task_type: TaskType::Cutover,
        dependencies: &[1],
        parent_id: None,
    },
    Seed {
        id: 6,
        name: "Extract and load production data",
        owner: "Data Team",
        start: (2025, 4, 5),
        end: (2025, 4, 5),
        task_type: TaskType::Cutover,
        dependencies: &[3, 4],
        parent_id: Some(5),
    },
    Seed {
        id: 7,
        name: "Reconciliation checks",
        owner: "QA",
        start: (2025, 4, 6),
        end: (2025, 4, 6),
        task_type: TaskType::Cutover,
        dependencies: &[6],
        parent_id: Some(5),
    },
    Seed {
        id: 8,
        name: "Downstream feeds re-pointed",
        owner: "Integration",
        start: (2025, 4, 7),
        end: (2025, 4, 7),
        task_type: TaskType::DownstreamIntegration,
        dependencies: &[7],
        parent_id: None,
    },
    Seed {
        id: 9,
        name: "Go-live",
        owner: "PMO",
        start: (2025, 4, 8),
        end: (2025, 4, 8),
        task_type: TaskType::Milestone,
        dependencies: &[8],
        parent_id: None,
    },
];

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn default_plan() -> Vec<Task> {
    SEEDS
        .iter()
        .zip(1..)
        .map(|(seed, order)| Task {
            id: seed.id,
            name: seed.name.to_string(),
            owner: seed.owner.to_string(),
            start: date(seed.start),
            end: date(seed.end),
            task_type: seed.task_type,
            status: TaskStatus::Todo,
            dependencies: seed.dependencies.to_vec(),
            order,
            parent_id: seed.parent_id,
            is_expanded: true,
        })
        .collect()
}
