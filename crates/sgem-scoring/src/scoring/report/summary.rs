use super::super::config::ScoringConfig;
use super::super::domain::{
    IndicatorId, ObjectiveId, PerspectiveId, Project, ProjectId, ProjectStatus,
};
use super::super::eva::EvaMetrics;
use super::super::indicators::{
    critical_alerts, tally, IndicatorAlert, IndicatorEvaluation, IndicatorStatus, IndicatorTrend,
    StatusTally,
};
use super::super::measurements::reclassify;
use super::super::perspectives::{
    aggregate, heatmap, overall_performance, HeatmapEntry, ProgressBand,
};
use super::super::portfolio::{portfolio_summary, PortfolioSummary};
use super::super::smart::{validate, SmartAssessment};
use super::super::snapshot::ScorecardSnapshot;
use super::views::{
    round_to, AlertView, IndicatorView, ObjectiveView, PerspectiveView, PortfolioView,
    ProjectView, ScorecardInsights, ScorecardSummary,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorScore {
    pub indicator_id: IndicatorId,
    pub code: String,
    pub name: String,
    pub unit: String,
    pub target: f64,
    pub current_value: Option<f64>,
    pub evaluation: Option<IndicatorEvaluation>,
    pub trend: IndicatorTrend,
    /// Why the indicator or its measurement history was rejected.
    pub issue: Option<String>,
    /// Stored measurement statuses that disagree with their values.
    pub stale_measurements: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectiveScore {
    pub objective_id: ObjectiveId,
    pub code: String,
    pub title: String,
    pub perspective_id: PerspectiveId,
    pub progress: u8,
    pub progress_band: ProgressBand,
    pub smart: SmartAssessment,
    pub linked_indicators: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectScore {
    pub project_id: ProjectId,
    pub code: String,
    pub title: String,
    pub status: ProjectStatus,
    pub planned_progress: f64,
    pub metrics: Option<EvaMetrics>,
    pub issue: Option<String>,
}

/// Everything the dashboards derive from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardReport {
    pub as_of: NaiveDate,
    pub indicators: Vec<IndicatorScore>,
    pub tally: StatusTally,
    pub alerts: Vec<IndicatorAlert>,
    pub objectives: Vec<ObjectiveScore>,
    pub perspective_progress: BTreeMap<PerspectiveId, f64>,
    pub heatmap: Vec<HeatmapEntry>,
    pub overall_performance: f64,
    pub projects: Vec<ProjectScore>,
    pub portfolio: PortfolioSummary,
}

impl ScorecardReport {
    /// Rules that reject an entity record the reason on that entity's row
    /// instead of failing the whole report.
    pub fn build(snapshot: &ScorecardSnapshot, as_of: NaiveDate, config: &ScoringConfig) -> Self {
        let indicators = snapshot
            .indicators
            .iter()
            .map(|indicator| {
                let (evaluation, mut issue) = match indicator.evaluate() {
                    Ok(evaluation) => (Some(evaluation), None),
                    Err(err) => {
                        warn!(indicator = %indicator.code, error = %err, "indicator not evaluated");
                        (None, Some(err.to_string()))
                    }
                };
                let stale_measurements = match reclassify(indicator) {
                    Ok(history) => history.iter().filter(|entry| entry.is_stale()).count(),
                    Err(err) => {
                        warn!(
                            indicator = %indicator.code,
                            error = %err,
                            "measurement history not classified"
                        );
                        issue.get_or_insert_with(|| format!("measurement history: {err}"));
                        0
                    }
                };

                IndicatorScore {
                    indicator_id: indicator.id.clone(),
                    code: indicator.code.clone(),
                    name: indicator.name.clone(),
                    unit: indicator.unit.clone(),
                    target: indicator.target,
                    current_value: indicator.current_value,
                    evaluation,
                    trend: indicator.trend(),
                    issue,
                    stale_measurements,
                }
            })
            .collect();

        let objectives = snapshot
            .objectives
            .iter()
            .map(|objective| {
                let linked_indicators = snapshot.indicators_for(&objective.id).count();
                let has_deadline = objective.deadline.is_some()
                    || snapshot
                        .indicators_for(&objective.id)
                        .any(|indicator| !indicator.targets.is_empty())
                    || snapshot.projects_for(&objective.id).next().is_some();

                ObjectiveScore {
                    objective_id: objective.id.clone(),
                    code: objective.code.clone(),
                    title: objective.title.clone(),
                    perspective_id: objective.perspective_id.clone(),
                    progress: objective.progress,
                    progress_band: ProgressBand::for_progress(objective.progress),
                    smart: validate(
                        &objective.title,
                        &objective.description,
                        linked_indicators > 0,
                        has_deadline,
                    ),
                    linked_indicators,
                }
            })
            .collect();

        let mut derived_projects: Vec<Project> = Vec::with_capacity(snapshot.projects.len());
        let projects = snapshot
            .projects
            .iter()
            .map(|project| {
                let planned_progress = project.planned_progress(as_of);
                let (metrics, issue) = match project.eva(as_of, &config.thresholds) {
                    Ok(metrics) => {
                        derived_projects.push(project.with_eva(&metrics));
                        (Some(metrics), None)
                    }
                    Err(err) => {
                        warn!(project = %project.code, error = %err, "project EVA not computed");
                        derived_projects.push(project.clone());
                        (None, Some(err.to_string()))
                    }
                };

                ProjectScore {
                    project_id: project.id.clone(),
                    code: project.code.clone(),
                    title: project.title.clone(),
                    status: project.status,
                    planned_progress,
                    metrics,
                    issue,
                }
            })
            .collect();

        let report = Self {
            as_of,
            indicators,
            tally: tally(&snapshot.indicators),
            alerts: critical_alerts(&snapshot.indicators),
            objectives,
            perspective_progress: aggregate(&snapshot.perspectives, &snapshot.objectives),
            heatmap: heatmap(&snapshot.perspectives, &snapshot.objectives),
            overall_performance: overall_performance(&snapshot.objectives),
            projects,
            portfolio: portfolio_summary(&derived_projects, config.cpi_alert_below),
        };

        debug!(
            as_of = %report.as_of,
            indicators = report.indicators.len(),
            alerts = report.alerts.len(),
            critical_projects = report.portfolio.critical_projects,
            "scorecard report built"
        );
        report
    }

    pub fn summary(&self) -> ScorecardSummary {
        let portfolio = PortfolioView {
            total_projects: self.portfolio.total_projects,
            critical_projects: self.portfolio.critical_projects,
            total_approved: self.portfolio.total_approved,
            total_spent: self.portfolio.total_spent,
            execution_rate_pct: round_to(self.portfolio.execution_rate, 1),
            average_cpi: round_to(self.portfolio.average_cpi, 2),
            cpi_alerts: self
                .portfolio
                .cpi_alerts
                .iter()
                .map(|alert| format!("{} (CPI {:.2})", alert.code, alert.cpi))
                .collect(),
        };

        ScorecardSummary {
            as_of: self.as_of,
            overall_performance: self.overall_performance.round().clamp(0.0, 100.0) as u8,
            tally: self.tally,
            perspectives: self.heatmap.iter().map(perspective_view).collect(),
            indicators: self.indicators.iter().map(IndicatorScore::to_view).collect(),
            alerts: self.alerts.iter().map(alert_view).collect(),
            objectives: self.objectives.iter().map(ObjectiveScore::to_view).collect(),
            projects: self.projects.iter().map(ProjectScore::to_view).collect(),
            portfolio,
        }
    }
}

impl ScorecardSummary {
    pub fn insights(&self) -> ScorecardInsights {
        super::generate_insights(self)
    }
}

impl IndicatorScore {
    pub fn to_view(&self) -> IndicatorView {
        let evaluation = self.evaluation;
        IndicatorView {
            code: self.code.clone(),
            name: self.name.clone(),
            unit: self.unit.clone(),
            target: self.target,
            current_value: self.current_value,
            achievement_pct: evaluation
                .filter(|evaluation| evaluation.status != IndicatorStatus::NoData)
                .map(|evaluation| round_to(evaluation.ratio, 1)),
            status: evaluation.map(|evaluation| evaluation.status),
            status_label: evaluation
                .map(|evaluation| evaluation.status.label())
                .unwrap_or("Not evaluated"),
            polarity_label: evaluation.map(|evaluation| evaluation.polarity.label()),
            trend: self.trend,
            trend_label: self.trend.label(),
            issue: self.issue.clone(),
            stale_measurements: self.stale_measurements,
        }
    }
}

impl ObjectiveScore {
    pub fn to_view(&self) -> ObjectiveView {
        let smart_band = self.smart.band();
        ObjectiveView {
            code: self.code.clone(),
            title: self.title.clone(),
            progress: self.progress,
            progress_band: self.progress_band,
            progress_band_label: self.progress_band.label(),
            smart_score: self.smart.score,
            smart_band,
            smart_band_label: smart_band.label(),
            smart_gaps: self.smart.failing().map(|check| check.label.clone()).collect(),
        }
    }
}

impl ProjectScore {
    pub fn to_view(&self) -> ProjectView {
        ProjectView {
            code: self.code.clone(),
            title: self.title.clone(),
            status: self.status,
            status_label: self.status.label(),
            planned_progress: round_to(self.planned_progress, 1),
            cpi: self.metrics.map(|metrics| round_to(metrics.cpi, 2)),
            spi: self.metrics.map(|metrics| round_to(metrics.spi, 2)),
            health: self.metrics.map(|metrics| metrics.health),
            health_label: self
                .metrics
                .map(|metrics| metrics.health.label())
                .unwrap_or("Not computed"),
            issue: self.issue.clone(),
        }
    }
}

fn perspective_view(entry: &HeatmapEntry) -> PerspectiveView {
    PerspectiveView {
        name: entry.name.clone(),
        average_progress: entry.display_value,
        band: entry.band,
        band_label: entry.band.label(),
    }
}

fn alert_view(alert: &IndicatorAlert) -> AlertView {
    AlertView {
        code: alert.code.clone(),
        name: alert.name.clone(),
        target: alert.target,
        current_value: alert.current_value,
        achievement_pct: round_to(alert.ratio, 1),
    }
}
