use crate::types::report::{BurndownSeries, DayStatus};
use crate::types::sprint::Sprint;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BurndownDocument<'a> {
    sprint: SprintMeta<'a>,
    burndown: BurndownArrays,
    summary: Summary,
}

#[derive(Debug, Serialize)]
struct SprintMeta<'a> {
    number: Option<u32>,
    goal: Option<&'a str>,
    start_date: Option<&'a str>,
    end_date: Option<&'a str>,
    capacity: Option<f64>,
    status: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct BurndownArrays {
    dates: Vec<NaiveDate>,
    actual_remaining: Vec<f64>,
    ideal_remaining: Vec<f64>,
    completed: Vec<f64>,
    status: Vec<DayStatus>,
    total_points: f64,
    sprint_duration: i64,
}

#[derive(Debug, Serialize)]
struct Summary {
    final_completed: f64,
    final_remaining: f64,
    completion_pct: f64,
    finished: bool,
}

pub fn burndown_json(series: &BurndownSeries, sprint: &Sprint) -> Result<String, serde_json::Error> {
    let document = BurndownDocument {
        sprint: SprintMeta {
            number: sprint.number,
            goal: sprint.sprint_goal.as_deref(),
            start_date: sprint.start_date.as_deref(),
            end_date: sprint.end_date.as_deref(),
            capacity: sprint.capacity,
            status: sprint.status.as_deref(),
        },
        burndown: BurndownArrays {
            dates: series.days.iter().map(|day| day.date).collect(),
            actual_remaining: series.days.iter().map(|day| day.remaining).collect(),
            ideal_remaining: series.days.iter().map(|day| day.ideal).collect(),
            completed: series.days.iter().map(|day| day.completed).collect(),
            status: series.days.iter().map(|day| day.status).collect(),
            total_points: series.total_points,
            sprint_duration: series.duration_days,
        },
        summary: Summary {
            final_completed: series.final_completed(),
            final_remaining: series.final_remaining(),
            completion_pct: (series.completion_pct() * 10.0).round_ties_even() / 10.0,
            finished: series.finished(),
        },
    };
    serde_json::to_string_pretty(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::burndown;

    #[test]
    fn json_report_nests_sprint_and_burndown() {
        let sprint: Sprint = serde_yaml::from_str(
            r#"
number: 5
sprint_goal: Payments
status: active
capacity: 10
start_date: "2024-02-01"
end_date: "2024-02-03"
burndown:
  - { date: "2024-02-02", remaining_points: 4, completed_points: 6 }
"#,
        )
        .expect("sprint should parse");
        let series = burndown::generate(&sprint).expect("series should generate");

        let rendered = burndown_json(&series, &sprint).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

        assert_eq!(value["sprint"]["number"], 5);
        assert_eq!(value["sprint"]["goal"], "Payments");
        assert_eq!(value["burndown"]["dates"][0], "2024-02-01");
        assert_eq!(value["burndown"]["actual_remaining"][2], 4.0);
        assert_eq!(value["burndown"]["ideal_remaining"][1], 5.0);
        assert_eq!(value["burndown"]["status"][1], "AHEAD");
        assert_eq!(value["burndown"]["sprint_duration"], 2);
        assert_eq!(value["summary"]["completion_pct"], 60.0);
        assert_eq!(value["summary"]["finished"], false);
    }
}
