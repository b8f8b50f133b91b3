use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// List stored snapshots
    List,

    /// Capture the live task list under a name
    Save {
        /// Snapshot name
        name: String,
    },

    /// Replace the live task list with a stored snapshot
    Restore {
        /// Snapshot ID
        id: i64,
    },

    /// Write a snapshot document (a stored one, or the live task list)
    Export {
        /// Stored snapshot ID; omit to export the live task list
        id: Option<i64>,

        /// Name for a live export
        #[arg(long, default_value = "export")]
        name: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Store a previously exported snapshot document
    Import {
        /// Snapshot JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete a stored snapshot
    Delete {
        /// Snapshot ID
        id: i64,
    },
}
