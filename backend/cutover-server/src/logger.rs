use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Initialize the global logger.
///
/// * `log_file` - `None` logs to stdout, `Some` appends to that file
/// * `colored` - ANSI level colors on stdout; ignored for file output
#[track_caller]
pub fn initialize(
    log_level: cutover_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let output = match &log_file {
        Some(log_path) => {
            if let Some(dir) = log_path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    ServerError::logger(format!(
                        "Failed to open log file {}: {}",
                        log_path.display(),
                        e
                    ))
                })?;

            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, None))
                .chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, Some(&colors))
                })
                .chain(std::io::stdout())
        }
        // Plain output for non-TTY (systemd, docker logs)
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, None))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::logger(format!("Failed to initialize logger: {e}")))?;

    match &log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn write_line(
    out: FormatCallback<'_>,
    message: &std::fmt::Arguments<'_>,
    record: &Record<'_>,
    colors: Option<&ColoredLevelConfig>,
) {
    let date = humantime::format_rfc3339(SystemTime::now());
    let file = record.file().unwrap_or("unknown");
    let line = record.line().unwrap_or(0);

    match colors {
        Some(colors) => out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            level = colors.color(record.level()),
        )),
        None => out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            level = record.level(),
        )),
    }
}
