//! Engine configuration

use serde::{Deserialize, Serialize};

/// Configuration for a matching engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Price levels per side returned by `default_depth`.
    pub depth_levels: usize,
    /// Imbalance reported when ask volume is zero and bid volume is not.
    pub imbalance_sentinel: f64,
    /// Initial capacity of the trade log.
    pub trade_log_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth_levels: 5,
            imbalance_sentinel: 999.0,
            trade_log_capacity: 1024,
        }
    }
}
