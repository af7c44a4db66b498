use crate::error::{Result, SprintKitError};
use crate::types::feature::{ExportRow, RankedFeature};
use crate::types::report::BurndownSeries;
use csv::Writer;
use std::path::Path;

pub fn burndown_csv(series: &BurndownSeries) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["Date", "Day", "Completed", "Remaining", "Ideal", "Status"])?;
    for day in &series.days {
        writer.write_record([
            day.date.format("%Y-%m-%d").to_string(),
            day.day.to_string(),
            format!("{:.1}", day.completed),
            format!("{:.1}", day.remaining),
            format!("{:.1}", day.ideal),
            day.status.as_str().to_string(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| SprintKitError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
}

/// Writes `rank,name,reach,impact,confidence,effort,rice_score` with scores at 2 decimals.
pub fn write_ranking(path: &Path, ranking: &[RankedFeature]) -> Result<()> {
    write_rows(path, ranking).map_err(|source| SprintKitError::ExportFailed {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = ranking.len(), "ranking exported");
    Ok(())
}

fn write_rows(path: &Path, ranking: &[RankedFeature]) -> std::result::Result<(), csv::Error> {
    let mut writer = Writer::from_path(path)?;
    for ranked in ranking {
        writer.serialize(ExportRow::from(ranked))?;
    }
    writer.flush()?;
    Ok(())
}
