//! cutover - Cutover planner CLI
//!
//! A command-line front end for a running cutover-server.
//!
//! # Examples
//!
//! ```bash
//! # Outline of the plan, every subtree open
//! cutover task list --tree --expand-all
//!
//! # Only cutover-window tasks owned by alice, latest first
//! cutover task list --type cutover --owner alice --sort start --desc --pretty
//!
//! # Draft subtasks below task 4 and keep them
//! cutover plan generate "Migrate the billing schema" --parent 4 --apply
//! ```

mod cli;
mod commands;
mod plan_commands;
mod snapshot_commands;
mod task_commands;

use crate::{
    cli::Cli, commands::Commands, plan_commands::PlanCommands,
    snapshot_commands::SnapshotCommands, task_commands::TaskCommands,
};

use cutover_cli::{CliClientResult, Client, ClientError, RestTaskStore, render_tree};
use cutover_core::{
    Snapshot, SortConfig, SortDirection, TaskFilters, TaskStore, build_view_model, format_date,
};

use std::process::ExitCode;

use chrono::{Days, Local};
use clap::Parser;
use serde_json::{Map, Value, json};

/// What a command prints
enum Output {
    Json(Value),
    Text(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(&cli.server);

    let result = match cli.command {
        Commands::Task { action } => run_task(&client, action).await,
        Commands::Snapshot { action } => run_snapshot(&client, action).await,
        Commands::Plan { action } => run_plan(&client, action).await,
    };

    match result {
        Ok(Output::Text(text)) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Output::Json(value)) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_task(client: &Client, action: TaskCommands) -> CliClientResult<Output> {
    match action {
        TaskCommands::List {
            task_type,
            owner,
            status,
            sort,
            desc,
            expand_all,
            tree,
        } => {
            let store = RestTaskStore::connect(client.clone()).await?;
            let mut tasks = store.tasks().to_vec();
            if expand_all {
                tasks = cutover_core::expand_all(tasks);
            }

            let filters = TaskFilters {
                task_type,
                owner,
                status,
            };
            let direction = if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            let rows = build_view_model(&tasks, &filters, &SortConfig::new(sort, direction));

            if tree {
                Ok(Output::Text(render_tree(&rows)))
            } else {
                Ok(Output::Json(serde_json::to_value(&rows)?))
            }
        }

        TaskCommands::Add {
            name,
            owner,
            start,
            end,
            task_type,
            parent,
        } => {
            let start = start.unwrap_or_else(|| Local::now().date_naive());
            let end = end.unwrap_or_else(|| start.checked_add_days(Days::new(1)).unwrap_or(start));
            if end < start {
                return Err(ClientError::invalid_input(format!(
                    "end {} is before start {}",
                    end, start
                )));
            }

            let mut body = Map::new();
            body.insert("name".into(), json!(name));
            body.insert("owner".into(), json!(owner.unwrap_or_default()));
            body.insert("start".into(), json!(format_date(start)));
            body.insert("end".into(), json!(format_date(end)));
            if let Some(task_type) = task_type {
                body.insert("type".into(), json!(task_type));
            }
            if let Some(parent) = parent {
                body.insert("parentId".into(), json!(parent));
            }

            Ok(Output::Json(client.upsert_task(&Value::Object(body)).await?))
        }

        TaskCommands::Delete { id, cascade } => {
            let store = RestTaskStore::connect(client.clone()).await?;
            let deleted = if cascade {
                store.delete_task_cascade(id).await?
            } else {
                store.delete_task(id).await?;
                vec![id]
            };
            Ok(Output::Json(json!({ "deleted": deleted })))
        }

        TaskCommands::Reset => {
            let store = RestTaskStore::connect(client.clone()).await?;
            store.reset_to_default().await?;
            Ok(Output::Json(json!({ "count": store.tasks().len() })))
        }
    }
}

async fn run_snapshot(client: &Client, action: SnapshotCommands) -> CliClientResult<Output> {
    match action {
        SnapshotCommands::List => Ok(Output::Json(client.list_snapshots().await?)),
        SnapshotCommands::Save { name } => Ok(Output::Json(client.create_snapshot(&name).await?)),
        SnapshotCommands::Restore { id } => Ok(Output::Json(client.restore_snapshot(id).await?)),
        SnapshotCommands::Delete { id } => {
            client.delete_snapshot(id).await?;
            Ok(Output::Json(json!({ "deleted": id })))
        }

        SnapshotCommands::Export { id, name, output } => {
            let snapshot = match id {
                Some(id) => Snapshot::from_value(client.get_snapshot(id).await?)?,
                None => Snapshot::capture(name, &client.fetch_tasks().await?),
            };
            let document = snapshot.to_json()?;

            match output {
                Some(path) => {
                    tokio::fs::write(&path, document).await?;
                    Ok(Output::Json(json!({
                        "file": path.display().to_string(),
                        "taskCount": snapshot.tasks.len(),
                    })))
                }
                None => Ok(Output::Text(format!("{}\n", document))),
            }
        }

        SnapshotCommands::Import { file } => {
            let contents = tokio::fs::read_to_string(&file).await?;
            let document: Value = serde_json::from_str(&contents)?;
            // Reject locally before uploading
            Snapshot::from_value(document.clone())?;
            Ok(Output::Json(client.import_snapshot(&document).await?))
        }
    }
}

async fn run_plan(client: &Client, action: PlanCommands) -> CliClientResult<Output> {
    match action {
        PlanCommands::Generate {
            description,
            parent,
            apply,
        } => Ok(Output::Json(
            client.generate_plan(&description, parent, apply).await?,
        )),
    }
}
