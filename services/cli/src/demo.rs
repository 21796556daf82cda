use crate::infra::{import_measurements, load_snapshot};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use sgem_scoring::config::AppConfig;
use sgem_scoring::error::AppError;
use sgem_scoring::scoring::domain::Budget;
use sgem_scoring::scoring::report::views::{ScorecardInsights, ScorecardSummary};
use sgem_scoring::scoring::{
    planned_progress, project, validate, validate_draft, ScorecardReport, SmartBand,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Scorecard snapshot (JSON). Defaults to the built-in demo scorecard.
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
    /// Measurement CSV (date,value[,evidence_url][,status]) to append before scoring
    #[arg(long, requires = "indicator")]
    pub(crate) measurements: Option<PathBuf>,
    /// Indicator id the measurement CSV belongs to
    #[arg(long, requires = "measurements")]
    pub(crate) indicator: Option<String>,
    /// Evaluation date for schedules and overdue checks (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print the summary and insights as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SmartArgs {
    /// Objective title
    #[arg(long)]
    pub(crate) title: String,
    /// Objective description
    #[arg(long, default_value = "")]
    pub(crate) description: String,
    /// At least one indicator is linked to the objective
    #[arg(long)]
    pub(crate) has_indicators: bool,
    /// The objective has a deadline
    #[arg(long)]
    pub(crate) has_deadline: bool,
    /// Use the draft-time score instead of the five SMART checks
    #[arg(long)]
    pub(crate) draft: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ProjectTargetsArgs {
    /// Current value of the indicator
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) baseline: f64,
    /// Annual growth rate in percent
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) growth_rate: f64,
    /// Years to project (defaults to SCORING_PROJECTION_YEARS)
    #[arg(long)]
    pub(crate) years: Option<u32>,
    /// Year of the baseline (defaults to the current year)
    #[arg(long)]
    pub(crate) start_year: Option<i32>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaArgs {
    /// Approved budget
    #[arg(long)]
    pub(crate) approved: f64,
    /// Amount spent so far
    #[arg(long)]
    pub(crate) spent: f64,
    /// Physical progress in percent
    #[arg(long)]
    pub(crate) progress: f64,
    /// Planned progress in percent at the evaluation date
    #[arg(long, conflicts_with_all = ["start", "end"], required_unless_present_all = ["start", "end"])]
    pub(crate) planned_progress: Option<f64>,
    /// Schedule start (YYYY-MM-DD), used to derive planned progress
    #[arg(long, requires = "end", value_parser = crate::infra::parse_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Schedule end (YYYY-MM-DD), used to derive planned progress
    #[arg(long, requires = "start", value_parser = crate::infra::parse_date)]
    pub(crate) end: Option<NaiveDate>,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// The project is paused
    #[arg(long)]
    pub(crate) paused: bool,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    summary: &'a ScorecardSummary,
    insights: &'a ScorecardInsights,
}

pub(crate) fn run_report(args: ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let ReportArgs {
        snapshot,
        measurements,
        indicator,
        as_of,
        json,
    } = args;

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let (snapshot, from_disk) = load_snapshot(snapshot)?;
    let snapshot = import_measurements(snapshot, measurements, indicator)?;

    let report = ScorecardReport::build(&snapshot, as_of, &config.scoring);
    let summary = report.summary();
    let insights = summary.insights();

    if json {
        let output = ReportOutput {
            summary: &summary,
            insights: &insights,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    render_report(&summary, &insights, from_disk);
    Ok(())
}

fn render_report(summary: &ScorecardSummary, insights: &ScorecardInsights, from_disk: bool) {
    println!("Strategic scorecard (evaluated {})", summary.as_of);
    if from_disk {
        println!("Data source: snapshot file");
    } else {
        println!("Data source: demo scorecard (no snapshot provided)");
    }

    println!(
        "\nOverall performance: {}% ({})",
        insights.overall_performance, insights.performance_label
    );

    println!("\nPerspectives");
    for perspective in &summary.perspectives {
        println!(
            "- {}: {}% ({})",
            perspective.name, perspective.average_progress, perspective.band_label
        );
    }

    println!("\nObjectives");
    for objective in &summary.objectives {
        println!(
            "- {} {}: {}% progress ({}), SMART {}% ({})",
            objective.code,
            objective.title,
            objective.progress,
            objective.progress_band_label,
            objective.smart_score,
            objective.smart_band_label
        );
        if !objective.smart_gaps.is_empty() {
            println!("    missing: {}", objective.smart_gaps.join(", "));
        }
    }

    let tally = summary.tally;
    println!(
        "\nIndicators: {} on target | {} attention | {} critical | {} no data",
        tally.on_target, tally.attention, tally.critical, tally.no_data
    );
    for indicator in &summary.indicators {
        let current = indicator
            .current_value
            .map(|value| format!("{value} {}", indicator.unit))
            .unwrap_or_else(|| "no reading".to_string());
        match indicator.achievement_pct {
            Some(pct) => println!(
                "- {} {}: {} of {} {} ({pct}%) -> {}, {}",
                indicator.code,
                indicator.name,
                current,
                indicator.target,
                indicator.unit,
                indicator.status_label,
                indicator.trend_label.to_lowercase()
            ),
            None => println!(
                "- {} {}: {} -> {}",
                indicator.code, indicator.name, current, indicator.status_label
            ),
        }
        if let Some(issue) = &indicator.issue {
            println!("    {issue}");
        }
    }

    if summary.alerts.is_empty() {
        println!("\nCritical indicator alerts: none");
    } else {
        println!("\nCritical indicator alerts");
        for alert in &summary.alerts {
            println!(
                "- {} {}: {} against target {} ({}%)",
                alert.code, alert.name, alert.current_value, alert.target, alert.achievement_pct
            );
        }
    }

    println!("\nProjects");
    for project in &summary.projects {
        match (project.cpi, project.spi) {
            (Some(cpi), Some(spi)) => println!(
                "- {} {} [{}]: CPI {cpi:.2} | SPI {spi:.2} | planned {}% -> {}",
                project.code,
                project.title,
                project.status_label,
                project.planned_progress,
                project.health_label
            ),
            _ => println!(
                "- {} {} [{}]: {}",
                project.code,
                project.title,
                project.status_label,
                project.issue.as_deref().unwrap_or(project.health_label)
            ),
        }
    }

    let portfolio = &summary.portfolio;
    println!(
        "\nPortfolio: {} projects | {} critical | {:.1}% of {:.2} approved spent | average CPI {:.2}",
        portfolio.total_projects,
        portfolio.critical_projects,
        portfolio.execution_rate_pct,
        portfolio.total_approved,
        portfolio.average_cpi
    );
    if !portfolio.cpi_alerts.is_empty() {
        println!("Cost alerts: {}", portfolio.cpi_alerts.join(", "));
    }

    if !insights.observations.is_empty() {
        println!("\nObservations");
        for observation in &insights.observations {
            println!("- {observation}");
        }
    }
    if !insights.recommended_actions.is_empty() {
        println!("\nRecommended actions");
        for action in &insights.recommended_actions {
            println!("- {action}");
        }
    }
}

pub(crate) fn run_smart(args: SmartArgs) -> Result<(), AppError> {
    let SmartArgs {
        title,
        description,
        has_indicators,
        has_deadline,
        draft,
    } = args;

    if draft {
        let score = validate_draft(&title, &description);
        println!(
            "Draft SMART score: {score}% ({})",
            SmartBand::for_score(score).label()
        );
        return Ok(());
    }

    let assessment = validate(&title, &description, has_indicators, has_deadline);
    println!(
        "SMART score: {}% ({})",
        assessment.score,
        assessment.band().label()
    );
    for check in &assessment.checks {
        let mark = if check.valid { "ok" } else { "--" };
        println!("- [{mark}] {}", check.label);
        if !check.valid {
            println!("    {}", check.tip);
        }
    }
    Ok(())
}

pub(crate) fn run_project_targets(
    args: ProjectTargetsArgs,
    config: &AppConfig,
) -> Result<(), AppError> {
    let ProjectTargetsArgs {
        baseline,
        growth_rate,
        years,
        start_year,
    } = args;

    let years = years.unwrap_or(config.scoring.projection_years);
    let start_year = start_year.unwrap_or_else(|| Local::now().year());
    let targets = project(baseline, growth_rate, years, start_year)?;

    println!("Projected targets from {baseline} in {start_year} at {growth_rate}% a year");
    for target in &targets {
        println!(
            "- {} {}: {:.2} (tolerance {:.2} to {:.2})",
            target.year,
            target.period.label(),
            target.value,
            target.tolerance_min,
            target.tolerance_max
        );
    }
    Ok(())
}

pub(crate) fn run_eva(args: EvaArgs, config: &AppConfig) -> Result<(), AppError> {
    let EvaArgs {
        approved,
        spent,
        progress,
        planned_progress: planned,
        start,
        end,
        as_of,
        paused,
    } = args;

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let (planned, overdue) = match (planned, start, end) {
        (Some(planned), _, _) => (planned, false),
        (None, Some(start), Some(end)) => (
            planned_progress(start, end, as_of),
            as_of > end && progress < 100.0,
        ),
        // clap guarantees one of the two forms
        _ => (progress, false),
    };

    let budget = Budget {
        approved,
        spent,
        ..Budget::default()
    };
    let metrics = config
        .scoring
        .thresholds
        .compute(&budget, progress, planned, paused || overdue)?;

    println!("Planned progress: {planned:.1}%");
    println!("CPI: {:.2}", metrics.cpi);
    println!("SPI: {:.2}", metrics.spi);
    println!("Health: {}", metrics.health.label());
    if overdue {
        println!("Past the scheduled end with work remaining");
    }
    Ok(())
}
