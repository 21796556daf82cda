use super::super::domain::{ProjectHealth, ProjectStatus};
use super::super::indicators::{IndicatorStatus, IndicatorTrend, StatusTally};
use super::super::perspectives::{HeatmapBand, ProgressBand};
use super::super::smart::SmartBand;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PerspectiveView {
    pub name: String,
    pub average_progress: u8,
    pub band: HeatmapBand,
    pub band_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorView {
    pub code: String,
    pub name: String,
    pub unit: String,
    pub target: f64,
    pub current_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement_pct: Option<f64>,
    pub status: Option<IndicatorStatus>,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity_label: Option<&'static str>,
    pub trend: IndicatorTrend,
    pub trend_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    pub stale_measurements: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    pub code: String,
    pub name: String,
    pub target: f64,
    pub current_value: f64,
    pub achievement_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectiveView {
    pub code: String,
    pub title: String,
    pub progress: u8,
    pub progress_band: ProgressBand,
    pub progress_band_label: &'static str,
    pub smart_score: u8,
    pub smart_band: SmartBand,
    pub smart_band_label: &'static str,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub smart_gaps: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub code: String,
    pub title: String,
    pub status: ProjectStatus,
    pub status_label: &'static str,
    pub planned_progress: f64,
    pub cpi: Option<f64>,
    pub spi: Option<f64>,
    pub health: Option<ProjectHealth>,
    pub health_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    pub total_projects: usize,
    pub critical_projects: usize,
    pub total_approved: f64,
    pub total_spent: f64,
    pub execution_rate_pct: f64,
    pub average_cpi: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cpi_alerts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScorecardSummary {
    pub as_of: NaiveDate,
    pub overall_performance: u8,
    pub tally: StatusTally,
    pub perspectives: Vec<PerspectiveView>,
    pub indicators: Vec<IndicatorView>,
    pub alerts: Vec<AlertView>,
    pub objectives: Vec<ObjectiveView>,
    pub projects: Vec<ProjectView>,
    pub portfolio: PortfolioView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScorecardInsights {
    pub overall_performance: u8,
    pub performance_band: HeatmapBand,
    pub performance_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_perspective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_perspective_progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
}

/// Half-up rounding to `decimals` places, for display only.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}
