use super::domain::{Indicator, Measurement, MeasurementStatus, Target, TargetPeriod};
use super::error::{ensure_finite, ScoringError};
use super::targets::{round_half_up_2, TOLERANCE_BAND};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Places a reading relative to the tolerance band of a target.
pub fn classify_measurement(value: f64, target: &Target) -> Result<MeasurementStatus, ScoringError> {
    let value = ensure_finite("value", value)?;
    let status = if value > target.tolerance_max {
        MeasurementStatus::AboveTarget
    } else if value < target.tolerance_min {
        MeasurementStatus::BelowTarget
    } else {
        MeasurementStatus::OnTarget
    };
    Ok(status)
}

/// Annual target in force on `date`.
pub fn target_for_date(targets: &[Target], date: NaiveDate) -> Option<&Target> {
    targets
        .iter()
        .find(|target| target.period == TargetPeriod::Annual && target.year == date.year())
}

/// Band around the indicator's current target, used for years that have no
/// projected target.
fn fallback_target(indicator: &Indicator, year: i32) -> Target {
    let low = indicator.target * (1.0 - TOLERANCE_BAND);
    let high = indicator.target * (1.0 + TOLERANCE_BAND);
    Target {
        year,
        period: TargetPeriod::Annual,
        value: indicator.target,
        tolerance_min: round_half_up_2(low.min(high)),
        tolerance_max: round_half_up_2(low.max(high)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedMeasurement {
    pub date: NaiveDate,
    pub value: f64,
    pub target_value: f64,
    pub recorded: Option<MeasurementStatus>,
    pub computed: MeasurementStatus,
}

impl ClassifiedMeasurement {
    /// The stored status disagrees with the one recomputed from the value.
    pub fn is_stale(&self) -> bool {
        self.recorded.is_some_and(|recorded| recorded != self.computed)
    }
}

/// Recomputes the status of every stored measurement of an indicator,
/// oldest first.
pub fn reclassify(indicator: &Indicator) -> Result<Vec<ClassifiedMeasurement>, ScoringError> {
    let mut history: Vec<&Measurement> = indicator.measurements.iter().collect();
    history.sort_by_key(|measurement| measurement.date);

    history
        .into_iter()
        .map(|measurement| {
            let target = match target_for_date(&indicator.targets, measurement.date) {
                Some(target) => target.clone(),
                None => fallback_target(indicator, measurement.date.year()),
            };
            Ok(ClassifiedMeasurement {
                date: measurement.date,
                value: measurement.value,
                target_value: target.value,
                recorded: measurement.status,
                computed: classify_measurement(measurement.value, &target)?,
            })
        })
        .collect()
}
