//! Loading of entity snapshots handed to the scoring rules.
//!
//! This is the only module in [`crate::scoring`] that performs I/O. The rules
//! themselves receive borrowed, already-loaded values.

mod parser;

use super::domain::{
    Indicator, IndicatorId, Measurement, Objective, ObjectiveId, Perspective, Project,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid measurement CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("measurement row {row}: unable to parse date '{value}'")]
    InvalidDate { row: usize, value: String },
    #[error("measurement row {row}: value must be a finite number")]
    InvalidValue { row: usize },
    #[error("unknown indicator '{0}'")]
    UnknownIndicator(String),
    #[error("objective {code} reports progress {progress}, expected 0..=100")]
    InvalidProgress { code: String, progress: u8 },
}

/// Immutable picture of the scorecard as supplied by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardSnapshot {
    #[serde(default)]
    pub perspectives: Vec<Perspective>,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub indicators: Vec<Indicator>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ScorecardSnapshot {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading scorecard snapshot");
        let file = std::fs::File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_reader(reader)?;
        snapshot.validate()?;
        info!(
            perspectives = snapshot.perspectives.len(),
            objectives = snapshot.objectives.len(),
            indicators = snapshot.indicators.len(),
            projects = snapshot.projects.len(),
            "scorecard snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Rejects out-of-range objective progress. Dangling references are
    /// tolerated and only logged.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if let Some(objective) = self.objectives.iter().find(|o| o.progress > 100) {
            return Err(SnapshotError::InvalidProgress {
                code: objective.code.clone(),
                progress: objective.progress,
            });
        }

        let perspective_ids: HashSet<_> = self.perspectives.iter().map(|p| &p.id).collect();
        for objective in &self.objectives {
            if !perspective_ids.contains(&objective.perspective_id) {
                warn!(
                    objective = %objective.code,
                    perspective = %objective.perspective_id.as_str(),
                    "objective references unknown perspective"
                );
            }
        }

        let objective_ids: HashSet<_> = self.objectives.iter().map(|o| &o.id).collect();
        for indicator in &self.indicators {
            if !objective_ids.contains(&indicator.objective_id) {
                warn!(
                    indicator = %indicator.code,
                    objective = %indicator.objective_id.as_str(),
                    "indicator references unknown objective"
                );
            }
        }

        Ok(())
    }

    pub fn indicators_for<'a>(
        &'a self,
        objective_id: &'a ObjectiveId,
    ) -> impl Iterator<Item = &'a Indicator> + 'a {
        self.indicators
            .iter()
            .filter(move |indicator| &indicator.objective_id == objective_id)
    }

    pub fn projects_for<'a>(
        &'a self,
        objective_id: &'a ObjectiveId,
    ) -> impl Iterator<Item = &'a Project> + 'a {
        self.projects
            .iter()
            .filter(move |project| project.strategic_objective_id.as_ref() == Some(objective_id))
    }

    /// Appends measurements to an indicator. The most recent reading becomes
    /// the indicator's current value.
    ///
    /// A non-finite value rejects the whole batch; `InvalidValue::row` is the
    /// 1-based position in `measurements`.
    pub fn with_measurements(
        mut self,
        indicator_id: &IndicatorId,
        measurements: Vec<Measurement>,
    ) -> Result<Self, SnapshotError> {
        if let Some(index) = measurements
            .iter()
            .position(|measurement| !measurement.value.is_finite())
        {
            return Err(SnapshotError::InvalidValue { row: index + 1 });
        }

        let indicator = self
            .indicators
            .iter_mut()
            .find(|indicator| &indicator.id == indicator_id)
            .ok_or_else(|| SnapshotError::UnknownIndicator(indicator_id.as_str().to_string()))?;

        let imported = measurements.len();
        indicator.measurements.extend(measurements);
        indicator.measurements.sort_by_key(|measurement| measurement.date);
        if let Some(latest) = indicator.measurements.last() {
            indicator.current_value = Some(latest.value);
        }

        info!(
            indicator = %indicator.code,
            imported,
            current_value = ?indicator.current_value,
            "measurements imported"
        );
        Ok(self)
    }

    pub fn import_measurements<R: Read>(
        self,
        indicator_id: &IndicatorId,
        reader: R,
    ) -> Result<Self, SnapshotError> {
        let measurements = parser::parse_measurements(reader)?;
        self.with_measurements(indicator_id, measurements)
    }

    pub fn import_measurements_from_path<P: AsRef<Path>>(
        self,
        indicator_id: &IndicatorId,
        path: P,
    ) -> Result<Self, SnapshotError> {
        let file = std::fs::File::open(path)?;
        self.import_measurements(indicator_id, BufReader::new(file))
    }
}
