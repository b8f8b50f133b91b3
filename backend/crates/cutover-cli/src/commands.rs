use crate::{
    plan_commands::PlanCommands, snapshot_commands::SnapshotCommands,
    task_commands::TaskCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Snapshot operations
    Snapshot {
        #[command(subcommand)]
        action: SnapshotCommands,
    },

    /// AI-assisted plan generation
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
}
