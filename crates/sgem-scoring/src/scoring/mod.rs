//! Scoring rules for the strategic map, the indicator panel and the project
//! portfolio.
//!
//! Every rule is a pure function over borrowed entities: same input, same
//! output, no I/O and no clock reads. Callers pass `as_of` explicitly.

mod config;
pub mod dates;
pub mod domain;
mod error;
mod eva;
mod indicators;
mod measurements;
mod perspectives;
mod portfolio;
pub mod report;
mod smart;
pub mod snapshot;
mod targets;

pub use config::ScoringConfig;
pub use error::ScoringError;
pub use eva::{compute_eva, planned_progress, EvaMetrics, HealthThresholds};
pub use indicators::{
    critical_alerts, evaluate, tally, IndicatorAlert, IndicatorEvaluation, IndicatorStatus,
    IndicatorTrend, StatusTally, ATTENTION_FLOOR, ON_TARGET_FLOOR,
};
pub use measurements::{classify_measurement, reclassify, target_for_date, ClassifiedMeasurement};
pub use perspectives::{
    aggregate, heatmap, overall_performance, HeatmapBand, HeatmapEntry, ProgressBand,
};
pub use portfolio::{portfolio_summary, CpiAlert, PortfolioSummary};
pub use report::ScorecardReport;
pub use smart::{
    validate, validate_draft, SmartAssessment, SmartBand, SmartCheck, SmartCriterion,
    ACTION_VERBS, DRAFT_ACTION_VERBS,
};
pub use snapshot::{ScorecardSnapshot, SnapshotError};
pub use targets::{project, round_half_up_2, MAX_PROJECTION_YEARS, TOLERANCE_BAND};

#[cfg(test)]
mod tests;
