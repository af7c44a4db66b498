pub mod delimited;
pub mod json;
pub mod text;

use crate::error::{Result, SprintKitError};
use crate::types::report::BurndownSeries;
use crate::types::sprint::Sprint;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

pub fn render_burndown(
    series: &BurndownSeries,
    sprint: &Sprint,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(text::burndown_table(series, sprint)),
        OutputFormat::Csv => delimited::burndown_csv(series),
        OutputFormat::Json => json::burndown_json(series, sprint).map_err(SprintKitError::Json),
    }
}
