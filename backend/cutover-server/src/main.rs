use cutover_server::{AppState, LlmPlanClient, PlanGenerator, build_router, logger, metrics};

use cutover_core::{TaskIdGenerator, TaskNotifier};
use cutover_db::TaskRepository;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = cutover_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting cutover-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database (migrations run on connect)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = cutover_db::connect(&database_path).await?;
    info!("Database connection established");

    let tasks = TaskRepository::find_all(&pool).await?;
    info!("Loaded {} tasks", tasks.len());

    let ids = Arc::new(TaskIdGenerator::new());
    if let Some(max) = TaskRepository::max_id(&pool).await? {
        ids.observe(max);
    }

    let plan_generator: Option<Arc<dyn PlanGenerator>> = if config.plan.enabled {
        let client = LlmPlanClient::from_config(&config.plan)?;
        info!("Plan generator: {}", client.endpoint());
        Some(Arc::new(client))
    } else {
        warn!("Plan generation DISABLED");
        None
    };

    let metrics_handle = match metrics::install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Metrics disabled: {}", e);
            None
        }
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let app_state = AppState {
        pool,
        notifier: TaskNotifier::new(tasks),
        ids,
        view: config.view.clone(),
        plan_generator,
        plan_max_tasks: config.plan.max_tasks,
        metrics: metrics_handle,
        shutdown: shutdown_rx,
    };

    let app = build_router(
        app_state,
        Duration::from_secs(config.server.request_timeout_secs),
        Duration::from_secs(config.plan.timeout_secs),
    );

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address matters when port is 0 (auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
            // Ends open SSE streams so the server can drain
            shutdown_tx.send_replace(true);
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
