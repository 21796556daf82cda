use super::super::domain::ProjectHealth;
use super::super::indicators::IndicatorTrend;
use super::super::perspectives::HeatmapBand;
use super::views::{PerspectiveView, ScorecardInsights, ScorecardSummary};

const MAX_ACTIONS_PER_KIND: usize = 3;

pub(crate) fn generate_insights(summary: &ScorecardSummary) -> ScorecardInsights {
    let performance_band = HeatmapBand::for_progress(f64::from(summary.overall_performance));

    // Ties go to the first perspective in map order.
    let focus = summary
        .perspectives
        .iter()
        .filter(|perspective| perspective.band != HeatmapBand::High)
        .fold(None, |lowest: Option<&PerspectiveView>, perspective| match lowest {
            Some(current) if current.average_progress <= perspective.average_progress => {
                Some(current)
            }
            _ => Some(perspective),
        });

    let mut observations = Vec::new();
    let tally = summary.tally;
    if tally.total() > 0 {
        observations.push(format!(
            "{} of {} indicators on target, {} need attention, {} critical",
            tally.on_target,
            tally.total(),
            tally.attention,
            tally.critical
        ));
    }
    if tally.no_data > 0 {
        observations.push(format!(
            "{} indicator{} without measurements",
            tally.no_data,
            plural(tally.no_data)
        ));
    }

    let worsening: Vec<&str> = summary
        .indicators
        .iter()
        .filter(|indicator| indicator.trend == IndicatorTrend::Worsening)
        .map(|indicator| indicator.code.as_str())
        .collect();
    if !worsening.is_empty() {
        observations.push(format!(
            "Moving away from baseline: {}",
            worsening.join(", ")
        ));
    }

    if let Some(perspective) = focus {
        observations.push(format!(
            "{} is the weakest perspective at {}% average progress",
            perspective.name, perspective.average_progress
        ));
    }

    let stale: usize = summary
        .indicators
        .iter()
        .map(|indicator| indicator.stale_measurements)
        .sum();
    if stale > 0 {
        observations.push(format!(
            "{stale} recorded measurement status{} no longer match{} the target band",
            if stale == 1 { "" } else { "es" },
            if stale == 1 { "es" } else { "" }
        ));
    }

    let portfolio = &summary.portfolio;
    if portfolio.total_projects > 0 {
        observations.push(format!(
            "Portfolio executed {:.1}% of its approved budget with an average CPI of {:.2}",
            portfolio.execution_rate_pct, portfolio.average_cpi
        ));
    }
    if portfolio.critical_projects > 0 {
        observations.push(format!(
            "{} project{} in critical health",
            portfolio.critical_projects,
            plural(portfolio.critical_projects)
        ));
    }

    let mut recommended_actions: Vec<String> = summary
        .alerts
        .iter()
        .take(MAX_ACTIONS_PER_KIND)
        .map(|alert| {
            format!(
                "Review the action plan for {} ({}% of target)",
                alert.code, alert.achievement_pct
            )
        })
        .collect();

    recommended_actions.extend(
        summary
            .projects
            .iter()
            .filter(|project| project.health == Some(ProjectHealth::Critical))
            .take(MAX_ACTIONS_PER_KIND)
            .map(|project| match project.cpi {
                Some(cpi) => format!(
                    "Escalate {} to its sponsor ({}, CPI {cpi:.2})",
                    project.code, project.status_label
                ),
                None => format!("Escalate {} to its sponsor", project.code),
            }),
    );

    recommended_actions.extend(
        summary
            .objectives
            .iter()
            .filter(|objective| !objective.smart_gaps.is_empty())
            .take(MAX_ACTIONS_PER_KIND)
            .map(|objective| {
                format!(
                    "Refine objective {}: not yet {}",
                    objective.code,
                    objective.smart_gaps.join(", ").to_lowercase()
                )
            }),
    );

    recommended_actions.extend(
        summary
            .indicators
            .iter()
            .filter_map(|indicator| {
                let issue = indicator.issue.as_ref()?;
                Some(format!("Correct indicator {}: {issue}", indicator.code))
            })
            .take(MAX_ACTIONS_PER_KIND),
    );

    if observations.is_empty() {
        observations.push("Nothing on the map yet; load objectives and indicators".to_string());
    }

    ScorecardInsights {
        overall_performance: summary.overall_performance,
        performance_band,
        performance_label: performance_band.label(),
        focus_perspective: focus.map(|perspective| perspective.name.clone()),
        focus_perspective_progress: focus.map(|perspective| perspective.average_progress),
        observations,
        recommended_actions,
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
