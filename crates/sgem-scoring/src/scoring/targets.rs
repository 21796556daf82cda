//! Multi-year target projection with compound growth.

use super::domain::{Target, TargetPeriod};
use super::error::{ensure_finite, ScoringError};

/// Symmetric tolerance around every projected target (±5%).
pub const TOLERANCE_BAND: f64 = 0.05;
/// Longest horizon `project` accepts, in years.
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Rounds to two decimals, half-up on the hundredths digit.
pub fn round_half_up_2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Projects one annual target per year after `start_year`.
///
/// `value = baseline * (1 + rate/100)^i` for `i` in `1..=years`. Tolerances are
/// taken from the unrounded value, then rounded, and ordered so that
/// `tolerance_min <= tolerance_max` also holds for negative baselines.
pub fn project(
    baseline: f64,
    annual_growth_rate_percent: f64,
    years: u32,
    start_year: i32,
) -> Result<Vec<Target>, ScoringError> {
    let baseline = ensure_finite("baseline", baseline)?;
    let rate = ensure_finite("annual_growth_rate_percent", annual_growth_rate_percent)?;
    if years == 0 {
        return Err(ScoringError::invalid(
            "years",
            "at least one year must be projected",
        ));
    }
    if years > MAX_PROJECTION_YEARS {
        return Err(ScoringError::invalid(
            "years",
            format!("at most {MAX_PROJECTION_YEARS} years can be projected, got {years}"),
        ));
    }
    let years = i32::try_from(years)
        .map_err(|_| ScoringError::invalid("years", "projection horizon is too large"))?;

    let factor = 1.0 + rate / 100.0;
    let mut targets = Vec::with_capacity(years as usize);
    for i in 1..=years {
        let raw = baseline * factor.powi(i);
        let low = raw * (1.0 - TOLERANCE_BAND);
        let high = raw * (1.0 + TOLERANCE_BAND);
        let year = start_year
            .checked_add(i)
            .ok_or_else(|| ScoringError::invalid("start_year", "projection overflows year"))?;

        targets.push(Target {
            year,
            period: TargetPeriod::Annual,
            value: ensure_finite("projected value", round_half_up_2(raw))?,
            tolerance_min: round_half_up_2(low.min(high)),
            tolerance_max: round_half_up_2(low.max(high)),
        });
    }

    Ok(targets)
}
