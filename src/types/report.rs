use chrono::NaiveDate;
use serde::Serialize;

/// Three-point velocity trend heuristic; not a statistical test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    Variable,
    InsufficientData,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
            Self::Variable => "variable",
            Self::InsufficientData => "insufficient_data",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub sprint: u32,
    pub planned: u32,
    pub completed: u32,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSprint {
    pub goal: String,
    pub capacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VelocityReport {
    pub project: String,
    pub current_sprint: u32,
    pub current: Option<CurrentSprint>,
    pub current_velocity: f64,
    pub history: Vec<HistoryRow>,
    pub rolling_average: f64,
    pub trend: Trend,
    pub recommended_capacity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    Complete,
    Ahead,
    Behind,
    OnTrack,
}

impl DayStatus {
    pub fn classify(remaining: f64, ideal: f64) -> Self {
        if remaining == 0.0 {
            Self::Complete
        } else if remaining < ideal {
            Self::Ahead
        } else if remaining > ideal {
            Self::Behind
        } else {
            Self::OnTrack
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "COMPLETE",
            Self::Ahead => "AHEAD",
            Self::Behind => "BEHIND",
            Self::OnTrack => "ON_TRACK",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BurndownDay {
    pub date: NaiveDate,
    pub day: usize,
    pub remaining: f64,
    pub ideal: f64,
    pub completed: f64,
    pub status: DayStatus,
}

/// Dense per-day series covering the sprint range, both ends included.
#[derive(Debug, Clone, PartialEq)]
pub struct BurndownSeries {
    pub sprint: u32,
    pub total_points: f64,
    pub duration_days: i64,
    pub days: Vec<BurndownDay>,
}

impl BurndownSeries {
    pub fn final_completed(&self) -> f64 {
        self.days.last().map(|day| day.completed).unwrap_or(0.0)
    }

    pub fn final_remaining(&self) -> f64 {
        self.days
            .last()
            .map(|day| day.remaining)
            .unwrap_or(self.total_points)
    }

    pub fn completion_pct(&self) -> f64 {
        if self.total_points > 0.0 {
            self.final_completed() / self.total_points * 100.0
        } else {
            0.0
        }
    }

    pub fn finished(&self) -> bool {
        self.final_remaining() == 0.0
    }
}
