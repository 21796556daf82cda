//! Scoring engine behind the strategic management dashboards.
//!
//! The [`scoring`] module holds the pure rules (indicator status, SMART quality,
//! target projection, project EVA, perspective and portfolio roll-ups). The
//! surrounding modules carry the application plumbing: environment driven
//! [`config`], the aggregated [`error`] type and [`telemetry`] setup.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
