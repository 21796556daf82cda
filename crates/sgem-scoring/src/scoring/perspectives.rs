use super::domain::{Objective, Perspective, PerspectiveId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean objective progress per perspective, unrounded. A perspective with no
/// objectives averages to `0.0`.
pub fn aggregate(
    perspectives: &[Perspective],
    objectives: &[Objective],
) -> BTreeMap<PerspectiveId, f64> {
    perspectives
        .iter()
        .map(|perspective| {
            let average = mean_progress(
                objectives
                    .iter()
                    .filter(|objective| objective.perspective_id == perspective.id),
            );
            (perspective.id.clone(), average)
        })
        .collect()
}

/// Mean progress over every objective on the map.
pub fn overall_performance(objectives: &[Objective]) -> f64 {
    mean_progress(objectives.iter())
}

fn mean_progress<'a>(objectives: impl Iterator<Item = &'a Objective>) -> f64 {
    let (sum, count) = objectives.fold((0.0_f64, 0_usize), |(sum, count), objective| {
        (sum + f64::from(objective.progress), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Heatmap colouring of a perspective average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapBand {
    High,
    Medium,
    Low,
}

impl HeatmapBand {
    pub fn for_progress(value: f64) -> Self {
        if value >= 80.0 {
            Self::High
        } else if value >= 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Progress colouring of an objective node on the strategic map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    Good,
    Fair,
    Poor,
}

impl ProgressBand {
    pub fn for_progress(progress: u8) -> Self {
        if progress >= 70 {
            Self::Good
        } else if progress >= 40 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapEntry {
    pub perspective_id: PerspectiveId,
    pub name: String,
    pub average: f64,
    /// `average` rounded for display; the band is read from this value.
    pub display_value: u8,
    pub band: HeatmapBand,
}

/// One heatmap row per perspective, in the order given.
pub fn heatmap(perspectives: &[Perspective], objectives: &[Objective]) -> Vec<HeatmapEntry> {
    let averages = aggregate(perspectives, objectives);
    perspectives
        .iter()
        .map(|perspective| {
            let average = averages.get(&perspective.id).copied().unwrap_or(0.0);
            let display_value = average.round().clamp(0.0, 100.0) as u8;
            HeatmapEntry {
                perspective_id: perspective.id.clone(),
                name: perspective.name.clone(),
                average,
                display_value,
                band: HeatmapBand::for_progress(f64::from(display_value)),
            }
        })
        .collect()
}
