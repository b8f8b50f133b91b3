use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY, DatabaseConfig, LoggingConfig,
    PlanConfig, ServerConfig, ViewConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Overrides the config directory (default `./.cutover`)
pub const CONFIG_DIR_ENV: &str = "CUTOVER_CONFIG_DIR";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub view: ViewConfig,
    pub plan: PlanConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. CUTOVER_CONFIG_DIR env var, else ./.cutover/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CUTOVER_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: CUTOVER_CONFIG_DIR env var > ./.cutover/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all sections. Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.view.validate()?;
        self.plan.validate()?;

        if let Some(file) = &self.logging.file
            && (file.trim().is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name inside logging.dir",
            ));
        }

        Ok(())
    }

    /// Absolute path to the database file
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (timeout {}s)",
            self.server.host, self.server.port, self.server.request_timeout_secs
        );
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  view: padding={}d, day width={}px",
            self.view.padding_days, self.view.day_width_px
        );

        if self.plan.enabled {
            info!(
                "  plan: {} via {} (key from ${}: {}, timeout {}s, max {} tasks)",
                self.plan.model,
                self.plan.base_url,
                self.plan.api_key_env,
                if self.plan.api_key().is_some() {
                    "set"
                } else {
                    "missing"
                },
                self.plan.timeout_secs,
                self.plan.max_tasks
            );
        } else {
            info!("  plan: disabled");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CUTOVER_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CUTOVER_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "CUTOVER_SERVER_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        );

        // Database
        Self::apply_env_string("CUTOVER_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("CUTOVER_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("CUTOVER_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("CUTOVER_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("CUTOVER_LOG_COLORED", &mut self.logging.colored);

        // View
        Self::apply_env_parse("CUTOVER_VIEW_PADDING_DAYS", &mut self.view.padding_days);
        Self::apply_env_parse("CUTOVER_VIEW_DAY_WIDTH_PX", &mut self.view.day_width_px);

        // Plan
        Self::apply_env_bool("CUTOVER_PLAN_ENABLED", &mut self.plan.enabled);
        Self::apply_env_string("CUTOVER_PLAN_BASE_URL", &mut self.plan.base_url);
        Self::apply_env_string("CUTOVER_PLAN_MODEL", &mut self.plan.model);
        Self::apply_env_string("CUTOVER_PLAN_API_KEY_ENV", &mut self.plan.api_key_env);
        Self::apply_env_parse("CUTOVER_PLAN_TIMEOUT_SECS", &mut self.plan.timeout_secs);
        Self::apply_env_parse("CUTOVER_PLAN_MAX_TASKS", &mut self.plan.max_tasks);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
