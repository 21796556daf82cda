//! Indicator achievement and the three-colour status shown on dashboards.

use super::domain::{Indicator, IndicatorId, Polarity};
use super::error::{ensure_finite, ScoringError};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Achievement ratio (percent) at which an indicator counts as on target.
pub const ON_TARGET_FLOOR: f64 = 100.0;
/// Achievement ratio (percent) below which an indicator is critical.
pub const ATTENTION_FLOOR: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStatus {
    OnTarget,
    Attention,
    Critical,
    /// No measurement recorded yet.
    NoData,
}

impl IndicatorStatus {
    /// Thresholds use inclusive lower bounds and the unrounded ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= ON_TARGET_FLOOR {
            Self::OnTarget
        } else if ratio >= ATTENTION_FLOOR {
            Self::Attention
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OnTarget => "On target",
            Self::Attention => "Attention",
            Self::Critical => "Critical",
            Self::NoData => "No data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorEvaluation {
    /// `current / target * 100`, never rounded.
    pub ratio: f64,
    pub status: IndicatorStatus,
    /// Carried through for display. The ratio does not invert for
    /// [`Polarity::LowerBetter`] yet.
    pub polarity: Polarity,
}

/// Evaluates a reading against its target.
///
/// A missing reading yields a ratio of `0.0` with [`IndicatorStatus::NoData`].
/// A zero or non-finite target, or a non-finite reading, is rejected.
pub fn evaluate(
    current_value: Option<f64>,
    target: f64,
    polarity: Polarity,
) -> Result<IndicatorEvaluation, ScoringError> {
    let target = ensure_finite("target", target)?;
    if target == 0.0 {
        return Err(ScoringError::invalid(
            "target",
            "must be non-zero to compute an achievement ratio",
        ));
    }

    let Some(current) = current_value else {
        return Ok(IndicatorEvaluation {
            ratio: 0.0,
            status: IndicatorStatus::NoData,
            polarity,
        });
    };
    let current = ensure_finite("current_value", current)?;

    let ratio = current / target * 100.0;
    Ok(IndicatorEvaluation {
        ratio,
        status: IndicatorStatus::from_ratio(ratio),
        polarity,
    })
}

/// Direction of the latest reading relative to the baseline, read through
/// the indicator's polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorTrend {
    Improving,
    Worsening,
    Flat,
    NoData,
}

impl IndicatorTrend {
    /// A non-finite difference has no direction and counts as no data.
    pub fn between(baseline: f64, current_value: Option<f64>, polarity: Polarity) -> Self {
        let Some(current) = current_value else {
            return Self::NoData;
        };
        let diff = current - baseline;
        if !diff.is_finite() {
            return Self::NoData;
        }
        if diff == 0.0 {
            return Self::Flat;
        }

        let better = match polarity {
            Polarity::HigherBetter => diff > 0.0,
            Polarity::LowerBetter => diff < 0.0,
        };
        if better {
            Self::Improving
        } else {
            Self::Worsening
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Worsening => "Worsening",
            Self::Flat => "Flat",
            Self::NoData => "No data",
        }
    }
}

impl Indicator {
    pub fn evaluate(&self) -> Result<IndicatorEvaluation, ScoringError> {
        evaluate(self.current_value, self.target, self.polarity)
    }

    pub fn trend(&self) -> IndicatorTrend {
        IndicatorTrend::between(self.baseline, self.current_value, self.polarity)
    }
}

/// Traffic-light counts across a set of indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTally {
    pub on_target: usize,
    pub attention: usize,
    pub critical: usize,
    pub no_data: usize,
}

impl StatusTally {
    pub fn record(&mut self, status: IndicatorStatus) {
        match status {
            IndicatorStatus::OnTarget => self.on_target += 1,
            IndicatorStatus::Attention => self.attention += 1,
            IndicatorStatus::Critical => self.critical += 1,
            IndicatorStatus::NoData => self.no_data += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.on_target + self.attention + self.critical + self.no_data
    }
}

/// Counts indicators per status. Indicators that cannot be evaluated are
/// counted as `no_data`.
pub fn tally<'a, I>(indicators: I) -> StatusTally
where
    I: IntoIterator<Item = &'a Indicator>,
{
    let mut tally = StatusTally::default();
    for indicator in indicators {
        let status = match indicator.evaluate() {
            Ok(evaluation) => evaluation.status,
            Err(err) => {
                warn!(indicator = %indicator.code, error = %err, "indicator skipped in tally");
                IndicatorStatus::NoData
            }
        };
        tally.record(status);
    }
    tally
}

/// An indicator that needs action: its ratio sits below [`ATTENTION_FLOOR`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorAlert {
    pub indicator_id: IndicatorId,
    pub code: String,
    pub name: String,
    pub target: f64,
    pub current_value: f64,
    pub ratio: f64,
}

/// Indicators in critical status, in input order. Indicators without data
/// are left out.
pub fn critical_alerts<'a, I>(indicators: I) -> Vec<IndicatorAlert>
where
    I: IntoIterator<Item = &'a Indicator>,
{
    indicators
        .into_iter()
        .filter_map(|indicator| {
            let evaluation = indicator.evaluate().ok()?;
            if evaluation.status != IndicatorStatus::Critical {
                return None;
            }
            Some(IndicatorAlert {
                indicator_id: indicator.id.clone(),
                code: indicator.code.clone(),
                name: indicator.name.clone(),
                target: indicator.target,
                current_value: indicator.current_value?,
                ratio: evaluation.ratio,
            })
        })
        .collect()
}
