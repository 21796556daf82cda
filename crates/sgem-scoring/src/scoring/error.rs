/// Rejected input to one of the scoring rules.
///
/// Missing data is not an error; each rule models it as a normal outcome.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

impl ScoringError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ScoringError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::invalid(
            field,
            format!("must be a finite number, got {value}"),
        ))
    }
}

pub(crate) fn ensure_percent(field: &'static str, value: f64) -> Result<f64, ScoringError> {
    let value = ensure_finite(field, value)?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ScoringError::invalid(
            field,
            format!("must be within 0..=100, got {value}"),
        ))
    }
}
