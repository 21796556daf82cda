use crate::demo::{
    run_eva, run_project_targets, run_report, run_smart, EvaArgs, ProjectTargetsArgs, ReportArgs,
    SmartArgs,
};
use clap::{Parser, Subcommand};
use sgem_scoring::config::AppConfig;
use sgem_scoring::error::AppError;
use sgem_scoring::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "sgem",
    about = "Score the strategic map, indicators and project portfolio from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the scorecard report for a snapshot (default command)
    Report(ReportArgs),
    /// Assess the SMART quality of an objective
    Smart(SmartArgs),
    /// Project annual targets with compound growth
    ProjectTargets(ProjectTargetsArgs),
    /// Compute CPI, SPI and health for a single project
    Eva(EvaArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::default()));

    match command {
        Command::Report(args) => run_report(args, &config),
        Command::Smart(args) => run_smart(args),
        Command::ProjectTargets(args) => run_project_targets(args, &config),
        Command::Eva(args) => run_eva(args, &config),
    }
}
