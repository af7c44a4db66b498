use thiserror::Error;

#[derive(Error, Debug)]
pub enum SprintKitError {
    #[error("file not found: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid YAML format in {path}: {source}")]
    StatusParse {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("CSV is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("invalid feature: {0}")]
    InvalidFeature(#[from] crate::rice::RowError),

    #[error("failed to export results to {path}: {source}")]
    ExportFailed {
        path: String,
        source: csv::Error,
    },

    #[error("no valid features found in {0}")]
    NoValidFeatures(String),

    #[error("sprint {0} not found")]
    SprintNotFound(u32),

    #[error("no current sprint found")]
    NoCurrentSprint,

    #[error("sprint {0} is missing a valid start_date or end_date")]
    MissingSprintDates(u32),

    #[error("sprint {sprint} ends ({end}) before it starts ({start})")]
    InvalidSprintRange {
        sprint: u32,
        start: String,
        end: String,
    },

    #[error("operation cancelled by user")]
    Cancelled,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SprintKitError>;
