//! Run configuration.

use acm_engine::SolverConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    pub solver: SolverConfig,
    /// Solve cases with an identical fingerprint only once per run.
    pub deduplicate: bool,
    /// Also run the other solver on every case and warn on disagreement.
    pub cross_check: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            deduplicate: true,
            cross_check: false,
        }
    }
}
