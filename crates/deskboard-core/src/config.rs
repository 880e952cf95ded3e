use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::charts::LIVE_TICK_MS;
use crate::state::DashTuning;
use crate::state::COUNTER_DURATION_MS;
use crate::state::NARROW_VIEWPORT_COLS;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub tick_interval_ms: u64,
    pub counter_duration_ms: u64,
    pub narrow_width_cols: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            tick_interval_ms: LIVE_TICK_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            narrow_width_cols: NARROW_VIEWPORT_COLS,
        }
    }
}

impl Config {
    pub fn tuning(&self) -> DashTuning {
        DashTuning {
            counter_duration_ms: self.counter_duration_ms,
            narrow_width_cols: self.narrow_width_cols,
        }
    }
}
