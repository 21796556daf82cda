use super::super::dates::parse_date;
use super::super::domain::{Measurement, MeasurementStatus};
use super::SnapshotError;
use serde::Deserialize;
use std::io::Read;

/// Reads `date,value[,evidence_url][,status]` rows. Row numbers in errors are
/// 1-based and count the header.
pub(crate) fn parse_measurements<R: Read>(reader: R) -> Result<Vec<Measurement>, SnapshotError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut measurements = Vec::new();

    for (index, record) in csv_reader.deserialize::<MeasurementRow>().enumerate() {
        let row = record?;
        let line = index + 2;
        let date = parse_date(&row.date).ok_or_else(|| SnapshotError::InvalidDate {
            row: line,
            value: row.date.clone(),
        })?;
        if !row.value.is_finite() {
            return Err(SnapshotError::InvalidValue { row: line });
        }

        measurements.push(Measurement {
            id: row.id.unwrap_or_else(|| format!("csv-{line}")),
            date,
            value: row.value,
            evidence_url: row.evidence_url,
            status: row.status,
        });
    }

    Ok(measurements)
}

#[derive(Debug, Deserialize)]
struct MeasurementRow {
    #[serde(default)]
    id: Option<String>,
    date: String,
    value: f64,
    #[serde(default)]
    evidence_url: Option<String>,
    #[serde(default)]
    status: Option<MeasurementStatus>,
}
