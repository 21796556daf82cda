use super::eva::HealthThresholds;
use serde::{Deserialize, Serialize};

/// Tunable cut-offs for the rules that have no fixed contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub thresholds: HealthThresholds,
    /// Projects with a CPI below this raise a cost alert.
    pub cpi_alert_below: f64,
    /// Length of the management cycle used when projecting targets.
    pub projection_years: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            thresholds: HealthThresholds::default(),
            cpi_alert_below: 0.95,
            projection_years: 4,
        }
    }
}
