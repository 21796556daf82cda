use super::common::*;
use crate::scoring::domain::Project;
use crate::scoring::{portfolio_summary, HealthThresholds};

fn derived_projects() -> Vec<Project> {
    let as_of = date(2025, 6, 1);
    let thresholds = HealthThresholds::default();
    projects()
        .iter()
        .map(|project| {
            let metrics = project.eva(as_of, &thresholds).expect("computes");
            project.with_eva(&metrics)
        })
        .collect()
}

#[test]
fn summary_rolls_up_budget_and_cost_alerts() {
    let summary = portfolio_summary(&derived_projects(), 0.95);

    assert_eq!(summary.total_projects, 3);
    assert_eq!(summary.critical_projects, 1);
    assert_eq!(summary.total_approved, 1_430_000.0);
    assert_eq!(summary.total_spent, 755_000.0);
    assert!((summary.execution_rate - 755_000.0 / 1_430_000.0 * 100.0).abs() < 1e-9);
    assert_eq!(summary.cpi_alerts.len(), 1);
    assert_eq!(summary.cpi_alerts[0].code, "PE-2025-02");
    assert!((summary.cpi_alerts[0].cpi - 0.6).abs() < 1e-9);
}

#[test]
fn projects_without_indices_count_as_on_budget() {
    let summary = portfolio_summary(&projects(), 0.95);

    assert_eq!(summary.average_cpi, 1.0);
    assert!(summary.cpi_alerts.is_empty());
    assert_eq!(summary.critical_projects, 0);
}

#[test]
fn empty_portfolio_reports_zeroes() {
    let summary = portfolio_summary(&[], 0.95);

    assert_eq!(summary.total_projects, 0);
    assert_eq!(summary.execution_rate, 0.0);
    assert_eq!(summary.average_cpi, 0.0);
}
