use super::RowError;
use crate::error::{Result, SprintKitError};
use crate::types::feature::Feature;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::{Path, PathBuf};

pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "reach", "impact", "confidence", "effort"];

/// Loads features from a CSV file; invalid rows are skipped with a warning.
pub fn load_features(path: &Path) -> Result<Vec<Feature>> {
    if !path.exists() {
        return Err(SprintKitError::PathNotFound(path.display().to_string()));
    }
    let reader = reader_builder().from_path(path)?;
    let features = read_features(reader)?;
    if features.is_empty() {
        return Err(SprintKitError::NoValidFeatures(path.display().to_string()));
    }
    tracing::info!(count = features.len(), path = %path.display(), "features loaded");
    Ok(features)
}

/// `<stem>_results.csv` next to the batch input.
pub fn default_export_path(batch: &Path) -> PathBuf {
    let stem = batch
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "features".to_string());
    batch.with_file_name(format!("{stem}_results.csv"))
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.trim(Trim::All).flexible(true);
    builder
}

fn read_features<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Feature>> {
    let headers = reader.headers()?.clone();
    let mut columns = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();
    for (slot, column) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|header| header == column) {
            Some(index) => *slot = index,
            None => missing.push(column.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(SprintKitError::MissingColumns(missing));
    }

    let mut features = Vec::new();
    // header is row 1
    for (index, record) in reader.records().enumerate() {
        let row = index + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("row {row}: invalid data ({e}), skipping");
                continue;
            }
        };
        match parse_row(&record, &columns) {
            Ok(feature) => features.push(feature),
            Err(err) => tracing::warn!("row {row}: {err}, skipping"),
        }
    }
    Ok(features)
}

fn parse_row(record: &StringRecord, columns: &[usize; 5]) -> std::result::Result<Feature, RowError> {
    let field = |slot: usize| record.get(columns[slot]).unwrap_or("");
    let number = |slot: usize| {
        let raw = field(slot);
        raw.parse::<f64>().map_err(|_| RowError::InvalidNumber {
            field: REQUIRED_COLUMNS[slot],
            value: raw.to_string(),
        })
    };

    let reach = number(1)?;
    let impact = number(2)?;
    let confidence = number(3)?;
    let effort = number(4)?;
    Feature::new(field(0), reach, impact, confidence, effort)
}
