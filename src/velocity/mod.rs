use crate::types::report::{CurrentSprint, HistoryRow, Trend, VelocityReport};
use crate::types::sprint::{Sprint, StatusFile, VelocityEntry};

pub const WINDOW: usize = 3;
const STABILITY_RATIO: f64 = 0.1;
const INCREASING_FACTOR: f64 = 1.05;
const DECREASING_FACTOR: f64 = 0.95;

fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

pub fn current_sprint_velocity(sprint: Option<&Sprint>) -> f64 {
    sprint.map(Sprint::completed_points).unwrap_or(0.0)
}

pub fn rolling_average(history: &[VelocityEntry]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let recent = &history[history.len().saturating_sub(WINDOW)..];
    let total: f64 = recent.iter().map(|entry| f64::from(entry.completed)).sum();
    round1(total / recent.len() as f64)
}

/// Classifies the last three entries against a threshold of 10% of their mean.
pub fn velocity_trend(history: &[VelocityEntry]) -> Trend {
    if history.len() < WINDOW {
        return Trend::InsufficientData;
    }
    let recent: Vec<f64> = history[history.len() - WINDOW..]
        .iter()
        .map(|entry| f64::from(entry.completed))
        .collect();

    let d1 = recent[1] - recent[0];
    let d2 = recent[2] - recent[1];
    let mean = recent.iter().sum::<f64>() / recent.len() as f64;
    let threshold = mean * STABILITY_RATIO;

    if d1 > threshold && d2 > threshold {
        Trend::Increasing
    } else if d1 < -threshold && d2 < -threshold {
        Trend::Decreasing
    } else if d1.abs() <= threshold && d2.abs() <= threshold {
        Trend::Stable
    } else {
        Trend::Variable
    }
}

pub fn completion_rate(entry: &VelocityEntry) -> f64 {
    if entry.planned == 0 {
        return 0.0;
    }
    round1(f64::from(entry.completed) / f64::from(entry.planned) * 100.0)
}

pub fn completion_rates(history: &[VelocityEntry]) -> Vec<f64> {
    history.iter().map(completion_rate).collect()
}

pub fn recommend_capacity(
    history: &[VelocityEntry],
    average: f64,
    trend: Trend,
    default_capacity: u32,
) -> u32 {
    let Some(last) = history.last() else {
        return default_capacity;
    };
    if history.len() < WINDOW {
        return last.completed;
    }

    let factor = match trend {
        Trend::Increasing => INCREASING_FACTOR,
        Trend::Decreasing => DECREASING_FACTOR,
        _ => 1.0,
    };
    (average * factor).round_ties_even().max(0.0) as u32
}

pub fn analyze(status: &StatusFile, default_capacity: u32) -> VelocityReport {
    let history = &status.velocity_history;
    let current_number = status.current_sprint.unwrap_or(0);
    let current_sprint = status.sprint(current_number);

    let rolling_average = rolling_average(history);
    let trend = velocity_trend(history);
    let rows = history
        .iter()
        .zip(completion_rates(history))
        .enumerate()
        .map(|(index, (entry, rate))| HistoryRow {
            sprint: entry.sprint.unwrap_or(index as u32 + 1),
            planned: entry.planned,
            completed: entry.completed,
            completion_rate: rate,
        })
        .collect();

    tracing::debug!(
        entries = history.len(),
        trend = trend.as_str(),
        rolling_average,
        "velocity metrics computed"
    );

    VelocityReport {
        project: status.project.clone(),
        current_sprint: current_number,
        current: current_sprint.map(|sprint| CurrentSprint {
            goal: sprint.goal().to_string(),
            capacity: sprint.capacity.unwrap_or(0.0),
        }),
        current_velocity: current_sprint_velocity(current_sprint),
        history: rows,
        rolling_average,
        trend,
        recommended_capacity: recommend_capacity(history, rolling_average, trend, default_capacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::DEFAULT_CAPACITY;

    fn history(completed: &[u32]) -> Vec<VelocityEntry> {
        completed
            .iter()
            .enumerate()
            .map(|(index, &completed)| VelocityEntry {
                sprint: Some(index as u32 + 1),
                planned: 20,
                completed,
            })
            .collect()
    }

    #[test]
    fn rolling_average_uses_last_three_entries() {
        assert_eq!(rolling_average(&history(&[10, 20, 30])), 20.0);
        assert_eq!(rolling_average(&history(&[100, 10, 20, 30])), 20.0);
        assert_eq!(rolling_average(&history(&[10, 15])), 12.5);
        assert_eq!(rolling_average(&history(&[10, 10, 11])), 10.3);
        assert_eq!(rolling_average(&[]), 0.0);
    }

    #[test]
    fn trend_classification() {
        assert_eq!(velocity_trend(&history(&[10, 20, 30])), Trend::Increasing);
        assert_eq!(velocity_trend(&history(&[20, 20, 20])), Trend::Stable);
        assert_eq!(velocity_trend(&history(&[30, 20, 10])), Trend::Decreasing);
        assert_eq!(velocity_trend(&history(&[10, 30, 10])), Trend::Variable);
        assert_eq!(velocity_trend(&history(&[20, 21, 22])), Trend::Stable);
        assert_eq!(velocity_trend(&history(&[10, 20])), Trend::InsufficientData);
    }

    #[test]
    fn completion_rates_guard_zero_planned() {
        let entries = vec![
            VelocityEntry {
                sprint: Some(1),
                planned: 30,
                completed: 25,
            },
            VelocityEntry {
                sprint: Some(2),
                planned: 0,
                completed: 5,
            },
        ];
        assert_eq!(completion_rates(&entries), vec![83.3, 0.0]);
    }

    #[test]
    fn capacity_recommendation() {
        assert_eq!(
            recommend_capacity(&[], 0.0, Trend::InsufficientData, DEFAULT_CAPACITY),
            40
        );
        let one = history(&[25]);
        assert_eq!(
            recommend_capacity(&one, rolling_average(&one), velocity_trend(&one), 40),
            25
        );
        let three = history(&[10, 20, 30]);
        assert_eq!(recommend_capacity(&three, 20.0, Trend::Increasing, 40), 21);
        assert_eq!(recommend_capacity(&three, 20.0, Trend::Decreasing, 40), 19);
        assert_eq!(recommend_capacity(&three, 20.0, Trend::Variable, 40), 20);
    }

    #[test]
    fn halves_round_to_even() {
        let three = history(&[10, 10, 10]);
        assert_eq!(recommend_capacity(&three, 10.0, Trend::Increasing, 40), 10);
        assert_eq!(recommend_capacity(&three, 30.0, Trend::Decreasing, 40), 28);

        let sixteenth = VelocityEntry {
            sprint: Some(1),
            planned: 16,
            completed: 1,
        };
        assert_eq!(completion_rate(&sixteenth), 6.2);
    }

    #[test]
    fn analyze_builds_report_from_status_file() {
        let status: StatusFile = serde_yaml::from_str(
            r#"
project: Atlas
current_sprint: 4
velocity_history:
  - { sprint: 1, planned: 20, completed: 10 }
  - { planned: 25, completed: 20 }
  - { sprint: 3, planned: 30, completed: 30 }
sprints:
  - number: 4
    sprint_goal: Ship onboarding
    capacity: 32
    metrics:
      completed_points: 16
"#,
        )
        .expect("status should parse");

        let report = analyze(&status, DEFAULT_CAPACITY);
        assert_eq!(report.project, "Atlas");
        assert_eq!(report.current_velocity, 16.0);
        assert_eq!(report.history[1].sprint, 2);
        assert_eq!(report.history[1].completion_rate, 80.0);
        assert_eq!(report.rolling_average, 20.0);
        assert_eq!(report.trend, Trend::Increasing);
        assert_eq!(report.recommended_capacity, 21);
        let current = report.current.expect("current sprint should resolve");
        assert_eq!(current.goal, "Ship onboarding");
        assert_eq!(current.capacity, 32.0);
    }

    #[test]
    fn analyze_without_current_sprint_reports_zero_velocity() {
        let status = StatusFile {
            project: "Atlas".to_string(),
            current_sprint: Some(9),
            ..StatusFile::default()
        };
        let report = analyze(&status, 30);
        assert!(report.current.is_none());
        assert_eq!(report.current_velocity, 0.0);
        assert_eq!(report.recommended_capacity, 30);
    }
}
