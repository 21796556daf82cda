mod insights;
mod summary;
pub mod views;

pub use summary::{IndicatorScore, ObjectiveScore, ProjectScore, ScorecardReport};

pub(crate) use insights::generate_insights;
