use cutover_core::{Filter, SortKey, TaskId, TaskStatus, TaskType};

use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks as view rows (filtered, sorted, flattened)
    List {
        /// Filter by type: prep, cutover, upstream, downstream, milestone, or all
        #[arg(long = "type", default_value = "all")]
        task_type: Filter<TaskType>,

        /// Filter by owner (exact match), or all
        #[arg(long, default_value = "all")]
        owner: Filter<String>,

        /// Filter by status: todo, in-progress, done, or all
        #[arg(long, default_value = "all")]
        status: Filter<TaskStatus>,

        /// Sort key: order, start, end, name, owner, status, type
        #[arg(long, default_value = "order")]
        sort: SortKey,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Show every subtree regardless of stored expansion state
        #[arg(long)]
        expand_all: bool,

        /// Render an indented outline instead of JSON
        #[arg(long)]
        tree: bool,
    },

    /// Add a task (the server assigns the id)
    Add {
        /// Task name
        #[arg(long)]
        name: String,

        /// Owner
        #[arg(long)]
        owner: Option<String>,

        /// Start date, YYYY-MM-DD (default: today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End date, YYYY-MM-DD (default: the day after start)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Task type: prep, cutover, upstream, downstream, milestone (default: prep)
        #[arg(long = "type")]
        task_type: Option<TaskType>,

        /// Parent task ID
        #[arg(long)]
        parent: Option<TaskId>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,

        /// Also delete every descendant
        #[arg(long)]
        cascade: bool,
    },

    /// Replace every task with the built-in default plan
    Reset,
}
