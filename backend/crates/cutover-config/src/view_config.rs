use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MAX_PADDING_DAYS: u32 = 365;
pub const DEFAULT_PADDING_DAYS: u32 = 3;
pub const MIN_DAY_WIDTH_PX: u32 = 4;
pub const MAX_DAY_WIDTH_PX: u32 = 200;
pub const DEFAULT_DAY_WIDTH_PX: u32 = 40;

/// Timeline geometry served by the view endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Days added before the earliest start and after the latest end
    pub padding_days: u32,
    /// Width of one day column
    pub day_width_px: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            padding_days: DEFAULT_PADDING_DAYS,
            day_width_px: DEFAULT_DAY_WIDTH_PX,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.padding_days > MAX_PADDING_DAYS {
            return Err(ConfigError::view(format!(
                "view.padding_days must be 0-{}, got {}",
                MAX_PADDING_DAYS, self.padding_days
            )));
        }

        if !(MIN_DAY_WIDTH_PX..=MAX_DAY_WIDTH_PX).contains(&self.day_width_px) {
            return Err(ConfigError::view(format!(
                "view.day_width_px must be {}-{}, got {}",
                MIN_DAY_WIDTH_PX, MAX_DAY_WIDTH_PX, self.day_width_px
            )));
        }

        Ok(())
    }
}
