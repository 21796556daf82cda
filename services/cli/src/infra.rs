use chrono::NaiveDate;
use sgem_scoring::error::AppError;
use sgem_scoring::scoring::domain::IndicatorId;
use sgem_scoring::scoring::ScorecardSnapshot;
use std::path::PathBuf;
use tracing::info;

/// Sample municipal scorecard used when no snapshot is supplied.
const DEMO_SNAPSHOT: &str = include_str!("../../../crates/sgem-scoring/data/sample_scorecard.json");

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Loads the snapshot at `path`, or the demo snapshot. The flag reports
/// whether the data came from disk.
pub(crate) fn load_snapshot(path: Option<PathBuf>) -> Result<(ScorecardSnapshot, bool), AppError> {
    match path {
        Some(path) => ScorecardSnapshot::from_path(path)
            .map(|snapshot| (snapshot, true))
            .map_err(AppError::from),
        None => {
            info!("no snapshot supplied, using the demo scorecard");
            ScorecardSnapshot::from_reader(DEMO_SNAPSHOT.as_bytes())
                .map(|snapshot| (snapshot, false))
                .map_err(AppError::from)
        }
    }
}

pub(crate) fn import_measurements(
    snapshot: ScorecardSnapshot,
    measurements: Option<PathBuf>,
    indicator: Option<String>,
) -> Result<ScorecardSnapshot, AppError> {
    match (measurements, indicator) {
        (Some(path), Some(indicator)) => snapshot
            .import_measurements_from_path(&IndicatorId::new(indicator), path)
            .map_err(AppError::from),
        _ => Ok(snapshot),
    }
}
