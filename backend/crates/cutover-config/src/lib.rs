mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod plan_config;
mod server_config;
mod view_config;

#[cfg(test)]
mod tests;

pub use config::{CONFIG_DIR_ENV, Config};
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use plan_config::PlanConfig;
pub use server_config::ServerConfig;
pub use view_config::ViewConfig;

const DEFAULT_CONFIG_DIRECTORY: &str = ".cutover";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "cutover.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
