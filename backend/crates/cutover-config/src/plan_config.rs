use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_KEY_ENV: &str = "CUTOVER_LLM_API_KEY";
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 600;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const MIN_MAX_TASKS: usize = 1;
pub const MAX_MAX_TASKS: usize = 500;
pub const DEFAULT_MAX_TASKS: usize = 100;

/// LLM plan generation. The API key itself never lives in the config file;
/// `api_key_env` names the environment variable that holds it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub enabled: bool,
    /// OpenAI-compatible API root (`/chat/completions` is appended)
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    pub timeout_secs: u64,
    /// Entries beyond this are quarantined
    pub max_tasks: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: String::from(DEFAULT_BASE_URL),
            model: String::from(DEFAULT_MODEL),
            api_key_env: String::from(DEFAULT_API_KEY_ENV),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_tasks: DEFAULT_MAX_TASKS,
        }
    }
}

impl PlanConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::plan(format!(
                "plan.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::plan("plan.model cannot be empty"));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::plan("plan.api_key_env cannot be empty"));
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::plan(format!(
                "plan.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !(MIN_MAX_TASKS..=MAX_MAX_TASKS).contains(&self.max_tasks) {
            return Err(ConfigError::plan(format!(
                "plan.max_tasks must be {}-{}, got {}",
                MIN_MAX_TASKS, MAX_MAX_TASKS, self.max_tasks
            )));
        }

        Ok(())
    }

    /// The API key from the environment, if set and non-empty
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
