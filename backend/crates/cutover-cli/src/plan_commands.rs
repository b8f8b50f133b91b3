use cutover_core::TaskId;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Ask the language model for a task breakdown
    Generate {
        /// What the plan should cover
        description: String,

        /// Attach generated tasks below this task
        #[arg(long)]
        parent: Option<TaskId>,

        /// Add the accepted tasks to the live task list
        #[arg(long)]
        apply: bool,
    },
}
