use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::deserialize_flexible_date;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

entity_id!(
    /// Identifier of a Balanced Scorecard perspective.
    PerspectiveId
);
entity_id!(
    /// Identifier of a strategic objective.
    ObjectiveId
);
entity_id!(
    /// Identifier of a performance indicator.
    IndicatorId
);
entity_id!(
    /// Identifier of a portfolio project.
    ProjectId
);

/// The four Balanced Scorecard dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerspectiveType {
    Financial,
    Customer,
    Processes,
    Learning,
}

impl PerspectiveType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financial",
            Self::Customer => "Citizens & Society",
            Self::Processes => "Internal Processes",
            Self::Learning => "Learning & Growth",
        }
    }
}

/// Grouping dimension for objectives. No rule computes over it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perspective {
    pub id: PerspectiveId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub perspective_type: PerspectiveType,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectiveStatus {
    Draft,
    Active,
    Archived,
}

impl ObjectiveStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Archived => "Archived",
        }
    }
}

/// Strategic objective placed on the map under one perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: ObjectiveId,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub perspective_id: PerspectiveId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub status: ObjectiveStatus,
    /// Rolled up elsewhere; always within `0..=100`.
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Whether a higher or a lower reading is the better one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
    HigherBetter,
    LowerBetter,
}

impl Polarity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HigherBetter => "Higher is better",
            Self::LowerBetter => "Lower is better",
        }
    }
}

/// Status of a single measurement against the target band of its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementStatus {
    AboveTarget,
    OnTarget,
    BelowTarget,
}

impl MeasurementStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AboveTarget => "Above target",
            Self::OnTarget => "On target",
            Self::BelowTarget => "Below target",
        }
    }
}

/// Historical reading of an indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    #[serde(default)]
    pub id: String,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: NaiveDate,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_url: Option<String>,
    /// Status as recorded at collection time, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MeasurementStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetPeriod {
    #[serde(alias = "ANUAL")]
    Annual,
    Semester,
    Quarter,
    Monthly,
}

impl TargetPeriod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Annual => "ANNUAL",
            Self::Semester => "SEMESTER",
            Self::Quarter => "QUARTER",
            Self::Monthly => "MONTHLY",
        }
    }
}

/// Future commitment for an indicator. `tolerance_min <= value <= tolerance_max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub year: i32,
    pub period: TargetPeriod,
    pub value: f64,
    pub tolerance_min: f64,
    pub tolerance_max: f64,
}

/// Key performance indicator attached to an objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub id: IndicatorId,
    pub code: String,
    pub name: String,
    pub objective_id: ObjectiveId,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub frequency: String,
    pub baseline: f64,
    pub target: f64,
    #[serde(default)]
    pub current_value: Option<f64>,
    pub polarity: Polarity,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measurements: Vec<Measurement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Planning,
    Approved,
    InProgress,
    Paused,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Approved => "Approved",
            Self::InProgress => "In Progress",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectHealth {
    #[default]
    Healthy,
    Attention,
    Critical,
}

impl ProjectHealth {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Attention => "Attention",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectMethodology {
    Traditional,
    Agile,
    Hybrid,
}

/// Budget lines of a project. Overruns (`spent > committed`) are legal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(default)]
    pub estimated: f64,
    pub approved: f64,
    pub spent: f64,
    #[serde(default)]
    pub committed: f64,
}

/// Portfolio project. `health`, `cpi` and `spi` are derived, never entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub sponsor: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub health: ProjectHealth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<ProjectMethodology>,
    pub progress: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_end_date: Option<NaiveDate>,
    pub budget: Budget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategic_objective_id: Option<ObjectiveId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spi: Option<f64>,
}
