use super::domain::{Project, ProjectHealth, ProjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpiAlert {
    pub project_id: ProjectId,
    pub code: String,
    pub cpi: f64,
}

/// Portfolio headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_projects: usize,
    pub critical_projects: usize,
    pub total_approved: f64,
    pub total_spent: f64,
    /// Spent over approved, in percent. `0.0` when nothing is approved.
    pub execution_rate: f64,
    /// Projects without a CPI count as `1.0`. `0.0` for an empty portfolio.
    pub average_cpi: f64,
    pub cpi_alerts: Vec<CpiAlert>,
}

/// Rolls projects up. Feed it projects carrying derived EVA figures
/// (see [`Project::with_eva`]) for live numbers.
pub fn portfolio_summary(projects: &[Project], cpi_alert_below: f64) -> PortfolioSummary {
    let total_approved: f64 = projects.iter().map(|project| project.budget.approved).sum();
    let total_spent: f64 = projects.iter().map(|project| project.budget.spent).sum();
    let execution_rate = if total_approved > 0.0 {
        total_spent / total_approved * 100.0
    } else {
        0.0
    };

    let average_cpi = if projects.is_empty() {
        0.0
    } else {
        projects
            .iter()
            .map(|project| project.cpi.unwrap_or(1.0))
            .sum::<f64>()
            / projects.len() as f64
    };

    let cpi_alerts = projects
        .iter()
        .filter_map(|project| {
            let cpi = project.cpi?;
            (cpi < cpi_alert_below).then(|| CpiAlert {
                project_id: project.id.clone(),
                code: project.code.clone(),
                cpi,
            })
        })
        .collect();

    PortfolioSummary {
        total_projects: projects.len(),
        critical_projects: projects
            .iter()
            .filter(|project| project.health == ProjectHealth::Critical)
            .count(),
        total_approved,
        total_spent,
        execution_rate,
        average_cpi,
        cpi_alerts,
    }
}
