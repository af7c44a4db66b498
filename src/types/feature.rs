use serde::{Deserialize, Serialize};

/// Per-user value on the fixed RICE impact scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Impact {
    Minimal,
    Low,
    Medium,
    High,
    Massive,
}

impl Impact {
    pub const ALL: [Impact; 5] = [
        Impact::Minimal,
        Impact::Low,
        Impact::Medium,
        Impact::High,
        Impact::Massive,
    ];

    pub fn value(self) -> f64 {
        match self {
            Self::Minimal => 0.25,
            Self::Low => 0.5,
            Self::Medium => 1.0,
            Self::High => 2.0,
            Self::Massive => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Massive => "Massive",
        }
    }

    /// Exact match against the scale; 1.5 or 0.3 are rejected.
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|impact| impact.value() == value)
    }
}

/// A validated feature with its score computed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub reach: f64,
    pub impact: Impact,
    pub confidence: f64,
    pub effort: f64,
    pub rice_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedFeature {
    pub rank: usize,
    pub feature: Feature,
}

/// One line of the exported ranking file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub rank: usize,
    pub name: String,
    pub reach: f64,
    pub impact: f64,
    pub confidence: f64,
    pub effort: f64,
    pub rice_score: f64,
}

impl From<&RankedFeature> for ExportRow {
    fn from(ranked: &RankedFeature) -> Self {
        let feature = &ranked.feature;
        Self {
            rank: ranked.rank,
            name: feature.name.clone(),
            reach: feature.reach,
            impact: feature.impact.value(),
            confidence: feature.confidence,
            effort: feature.effort,
            rice_score: (feature.rice_score * 100.0).round_ties_even() / 100.0,
        }
    }
}
