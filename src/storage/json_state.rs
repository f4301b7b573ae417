use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    core::utils::{write_atomic, PathResolver},
    errors::Result,
};

use super::TimestampStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_report_millis: Option<i64>,
}

/// Timestamp store backed by `state.json` in the application directory.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_base(base: &Path) -> Self {
        Self::new(PathResolver::state_file_in(base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(&self) -> Result<State> {
        if !self.path.exists() {
            return Ok(State::default());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(State::default());
        }
        Ok(serde_json::from_str(&data)?)
    }
}

impl TimestampStore for JsonStateStore {
    fn last_report_millis(&self) -> Result<Option<i64>> {
        Ok(self.read_state()?.last_report_millis)
    }

    fn record_report(&self, millis: i64) -> Result<()> {
        let mut state = self.read_state()?;
        state.last_report_millis = Some(millis);
        let json = serde_json::to_string_pretty(&state)?;
        write_atomic(&self.path, &json)
    }
}
