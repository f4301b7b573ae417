use chrono::{Duration, Weekday};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{ensure_dir, write_atomic, PathResolver},
    errors::{ReportError, Result},
    notify::NotificationPolicy,
};

/// User preferences stored at `<base>/config/config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notifications_enabled: bool,
    pub reminder_interval_secs: u64,
    pub overdue_after_hours: i64,
    /// Weekly off-day on which reminders fire around the clock, e.g. `"Sun"`.
    pub off_day: String,
    pub night_shift_start_hour: u32,
    pub night_shift_end_hour: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_guard_name: Option<String>,
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            reminder_interval_secs: 60,
            overdue_after_hours: 2,
            off_day: "Sun".into(),
            night_shift_start_hour: 17,
            night_shift_end_hour: 6,
            default_guard_name: None,
            plain_output: false,
        }
    }
}

impl Config {
    /// Validated reminder policy derived from these settings.
    pub fn notification_policy(&self) -> Result<NotificationPolicy> {
        self.reminder_interval()?;
        let off_day: Weekday = self.off_day.trim().parse().map_err(|_| {
            ReportError::Config(format!("`off_day` is not a weekday: {}", self.off_day))
        })?;
        for (key, hour) in [
            ("night_shift_start_hour", self.night_shift_start_hour),
            ("night_shift_end_hour", self.night_shift_end_hour),
        ] {
            if hour > 23 {
                return Err(ReportError::Config(format!(
                    "`{key}` must be between 0 and 23, got {hour}"
                )));
            }
        }
        if self.overdue_after_hours < 0 {
            return Err(ReportError::Config(
                "`overdue_after_hours` cannot be negative".into(),
            ));
        }
        Ok(NotificationPolicy {
            overdue_after: Duration::hours(self.overdue_after_hours),
            off_day,
            night_start_hour: self.night_shift_start_hour,
            night_end_hour: self.night_shift_end_hour,
        })
    }

    pub fn reminder_interval(&self) -> Result<std::time::Duration> {
        if self.reminder_interval_secs == 0 {
            return Err(ReportError::Config(
                "`reminder_interval_secs` must be at least 1".into(),
            ));
        }
        Ok(std::time::Duration::from_secs(self.reminder_interval_secs))
    }
}

/// Loads and saves [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Reads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
