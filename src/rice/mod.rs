pub mod batch;
pub mod interactive;

use crate::types::feature::{Feature, Impact, RankedFeature};
use std::fmt;

pub const REACH_RULE: &str = "Reach must be greater than 0";
pub const IMPACT_RULE: &str = "Impact must be 0.25, 0.5, 1, 2, or 3";
pub const CONFIDENCE_RULE: &str = "Confidence must be between 0 and 100";
pub const EFFORT_RULE: &str = "Effort must be greater than 0";

#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    EmptyName,
    InvalidNumber { field: &'static str, value: String },
    Reach,
    Impact,
    Confidence,
    Effort,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("Feature name cannot be empty"),
            Self::InvalidNumber { field, value } => {
                write!(f, "Invalid {field} value '{value}'")
            }
            Self::Reach => f.write_str(REACH_RULE),
            Self::Impact => f.write_str(IMPACT_RULE),
            Self::Confidence => f.write_str(CONFIDENCE_RULE),
            Self::Effort => f.write_str(EFFORT_RULE),
        }
    }
}

impl std::error::Error for RowError {}

pub fn rice_score(reach: f64, impact: f64, confidence: f64, effort: f64) -> f64 {
    if effort == 0.0 {
        return 0.0;
    }
    reach * impact * (confidence / 100.0) / effort
}

pub fn validate_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub fn validate_confidence(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

pub fn validate_impact(value: f64) -> bool {
    Impact::from_value(value).is_some()
}

impl Feature {
    pub fn new(
        name: &str,
        reach: f64,
        impact: f64,
        confidence: f64,
        effort: f64,
    ) -> Result<Self, RowError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RowError::EmptyName);
        }
        if !validate_positive(reach) {
            return Err(RowError::Reach);
        }
        let impact = Impact::from_value(impact).ok_or(RowError::Impact)?;
        if !validate_confidence(confidence) {
            return Err(RowError::Confidence);
        }
        if !validate_positive(effort) {
            return Err(RowError::Effort);
        }

        Ok(Self {
            name: name.to_string(),
            reach,
            impact,
            confidence,
            effort,
            rice_score: rice_score(reach, impact.value(), confidence, effort),
        })
    }
}

/// Highest score first; ties keep input order.
pub fn rank(features: &[Feature]) -> Vec<RankedFeature> {
    let mut sorted = features.to_vec();
    sorted.sort_by(|a, b| b.rice_score.total_cmp(&a.rice_score));
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, feature)| RankedFeature {
            rank: index + 1,
            feature,
        })
        .collect()
}
