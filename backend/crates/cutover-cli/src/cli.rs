use crate::commands::Commands;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "cutover")]
#[command(about = "Cutover planner CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL)]
    pub(crate) server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
