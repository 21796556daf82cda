//! Earned value analysis for portfolio projects.
//!
//! `CPI = earned value / actual cost` with `earned value = progress% * approved`.
//! `SPI = progress / planned progress`. Both fall back to `1.0` when their
//! denominator is zero: nothing spent yet, or nothing planned yet.

use super::domain::{Budget, Project, ProjectHealth, ProjectStatus};
use super::error::{ensure_finite, ensure_percent, ScoringError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cut-offs for the health classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// CPI strictly below this is critical.
    pub cpi_critical_below: f64,
    /// CPI strictly below this is attention.
    pub cpi_attention_below: f64,
    /// SPI strictly below this is attention.
    pub spi_attention_below: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            cpi_critical_below: 0.90,
            cpi_attention_below: 1.0,
            spi_attention_below: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaMetrics {
    pub cpi: f64,
    pub spi: f64,
    pub health: ProjectHealth,
}

impl HealthThresholds {
    /// Critical when cost efficiency collapses or the project is flagged
    /// (paused or past its end date), attention when either index lags.
    pub fn classify(&self, cpi: f64, spi: f64, flagged: bool) -> ProjectHealth {
        if flagged || cpi < self.cpi_critical_below {
            ProjectHealth::Critical
        } else if cpi < self.cpi_attention_below || spi < self.spi_attention_below {
            ProjectHealth::Attention
        } else {
            ProjectHealth::Healthy
        }
    }

    pub fn compute(
        &self,
        budget: &Budget,
        progress: f64,
        planned_progress: f64,
        flagged: bool,
    ) -> Result<EvaMetrics, ScoringError> {
        let progress = ensure_percent("progress", progress)?;
        let planned_progress = ensure_percent("planned_progress", planned_progress)?;
        let approved = ensure_finite("budget.approved", budget.approved)?;
        let spent = ensure_finite("budget.spent", budget.spent)?;
        if approved < 0.0 || spent < 0.0 {
            return Err(ScoringError::invalid(
                "budget",
                "approved and spent amounts must not be negative",
            ));
        }

        let cpi = if spent > 0.0 {
            (progress / 100.0 * approved) / spent
        } else {
            1.0
        };
        let spi = if planned_progress > 0.0 {
            progress / planned_progress
        } else {
            1.0
        };

        Ok(EvaMetrics {
            cpi,
            spi,
            health: self.classify(cpi, spi, flagged),
        })
    }
}

/// [`HealthThresholds::compute`] with the default cut-offs.
pub fn compute_eva(
    budget: &Budget,
    progress: f64,
    planned_progress: f64,
    paused: bool,
) -> Result<EvaMetrics, ScoringError> {
    HealthThresholds::default().compute(budget, progress, planned_progress, paused)
}

/// Share of the schedule elapsed on `as_of`, in percent, clamped to `0..=100`.
pub fn planned_progress(start: NaiveDate, end: NaiveDate, as_of: NaiveDate) -> f64 {
    let window = (end - start).num_days();
    if window <= 0 {
        return 100.0;
    }
    let elapsed = (as_of - start).num_days();
    (elapsed as f64 / window as f64 * 100.0).clamp(0.0, 100.0)
}

impl Project {
    /// Paused, or past its end date with work left.
    pub fn is_flagged(&self, as_of: NaiveDate) -> bool {
        self.status == ProjectStatus::Paused || (as_of > self.end_date && self.progress < 100.0)
    }

    pub fn planned_progress(&self, as_of: NaiveDate) -> f64 {
        planned_progress(self.start_date, self.end_date, as_of)
    }

    pub fn eva(
        &self,
        as_of: NaiveDate,
        thresholds: &HealthThresholds,
    ) -> Result<EvaMetrics, ScoringError> {
        thresholds.compute(
            &self.budget,
            self.progress,
            self.planned_progress(as_of),
            self.is_flagged(as_of),
        )
    }

    /// Copy of the project carrying the derived indices and health.
    pub fn with_eva(&self, metrics: &EvaMetrics) -> Project {
        Project {
            cpi: Some(metrics.cpi),
            spi: Some(metrics.spi),
            health: metrics.health,
            ..self.clone()
        }
    }
}
