use crate::types::feature::RankedFeature;
use crate::types::report::{BurndownSeries, DayStatus, Trend, VelocityReport};
use crate::types::sprint::Sprint;

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

pub fn ranking_table(ranking: &[RankedFeature]) -> String {
    let heavy = rule('=', 100);
    let mut out = String::new();
    out.push_str(&format!("\n{heavy}\n"));
    out.push_str("PRIORITIZATION RESULTS (Ranked by RICE Score)\n");
    out.push_str(&format!("{heavy}\n\n"));
    out.push_str(&format!(
        "{:<6} {:<30} {:<10} {:<10} {:<12} {:<10} {:<12}\n",
        "Rank", "Feature", "Reach", "Impact", "Confidence", "Effort", "RICE Score"
    ));
    out.push_str(&format!("{}\n", rule('-', 100)));

    for ranked in ranking {
        let feature = &ranked.feature;
        out.push_str(&format!(
            "{:<6} {:<30} {:<10.0} {:<10.2} {:<12.0}% {:<10.2} {:<12.2}\n",
            ranked.rank,
            feature.name,
            feature.reach,
            feature.impact.value(),
            feature.confidence,
            feature.effort,
            feature.rice_score
        ));
    }

    out.push_str(&format!("\n{heavy}\n"));
    out.push_str("INTERPRETATION:\n");
    out.push_str("  - Higher RICE scores indicate higher priority\n");
    out.push_str("  - Scores are relative; compare features against each other\n");
    out.push_str("  - Consider strategic alignment and dependencies alongside scores\n");
    out.push_str(&heavy);
    out.push('\n');
    out
}

fn trend_advice(trend: Trend) -> &'static str {
    match trend {
        Trend::Increasing => "Team velocity is increasing. Consider slight capacity increase.",
        Trend::Decreasing => "Team velocity is decreasing. Investigate blockers/issues.",
        Trend::Stable => "Team velocity is stable. Good predictability.",
        Trend::Variable | Trend::InsufficientData => {
            "Team velocity is variable. Monitor for patterns."
        }
    }
}

pub fn velocity_report(report: &VelocityReport) -> String {
    let heavy = rule('=', 60);
    let light = rule('-', 60);
    let entries = report.history.len();
    let mut lines = Vec::new();

    lines.push(heavy.clone());
    lines.push(format!("VELOCITY REPORT: {}", report.project));
    lines.push(heavy.clone());
    lines.push(String::new());

    lines.push(format!("Current Sprint: {}", report.current_sprint));
    if let Some(current) = &report.current {
        lines.push(format!("Sprint Goal: {}", current.goal));
        lines.push(format!("Capacity: {} points", current.capacity));
        lines.push(format!("Completed: {} points", report.current_velocity));
        if current.capacity > 0.0 {
            let pct = report.current_velocity / current.capacity * 100.0;
            lines.push(format!("Completion Rate: {pct:.1}%"));
        }
    }
    lines.push(String::new());

    lines.push("VELOCITY HISTORY:".to_string());
    lines.push(light.clone());
    if report.history.is_empty() {
        lines.push("No velocity history available.".to_string());
    } else {
        lines.push(format!(
            "{:<10} {:<10} {:<12} {:<10}",
            "Sprint", "Planned", "Completed", "Rate"
        ));
        lines.push(light.clone());
        for row in &report.history {
            lines.push(format!(
                "{:<10} {:<10} {:<12} {:<10.1}%",
                row.sprint, row.planned, row.completed, row.completion_rate
            ));
        }
    }
    lines.push(String::new());

    lines.push("VELOCITY METRICS:".to_string());
    lines.push(light.clone());
    if report.trend != Trend::InsufficientData {
        lines.push(format!(
            "3-Sprint Rolling Average: {:.1} points",
            report.rolling_average
        ));
        lines.push(format!(
            "Velocity Trend: {}",
            report.trend.as_str().to_uppercase().replace('_', " ")
        ));
    } else if let Some(last) = report.history.last() {
        lines.push(format!("Single Sprint Velocity: {} points", last.completed));
        lines.push("(Need 3 sprints for rolling average)".to_string());
    } else {
        lines.push("Insufficient data for velocity metrics.".to_string());
    }
    lines.push(String::new());

    lines.push("RECOMMENDATION:".to_string());
    lines.push(light);
    lines.push(format!(
        "Next Sprint Capacity: {} points",
        report.recommended_capacity
    ));
    if report.trend != Trend::InsufficientData {
        lines.push(trend_advice(report.trend).to_string());
    } else if entries > 0 {
        lines.push("Using last sprint velocity as baseline.".to_string());
        lines.push("Continue tracking for more accurate predictions.".to_string());
    } else {
        lines.push("No historical data. Using conservative default capacity.".to_string());
    }
    lines.push(String::new());
    lines.push(heavy);

    lines.join("\n")
}

fn status_label(status: DayStatus) -> &'static str {
    match status {
        DayStatus::OnTrack => "ON TRACK",
        other => other.as_str(),
    }
}

pub fn burndown_table(series: &BurndownSeries, sprint: &Sprint) -> String {
    let heavy = rule('=', 80);
    let mut lines = Vec::new();

    lines.push(heavy.clone());
    lines.push(format!("SPRINT {} BURNDOWN CHART", series.sprint));
    lines.push(heavy.clone());
    lines.push(format!("Sprint Goal: {}", sprint.goal()));
    lines.push(format!("Total Points: {}", series.total_points));
    lines.push(String::new());

    lines.push(format!(
        "{:<12} {:<6} {:<12} {:<12} {:<10} {:<10}",
        "Date", "Day", "Completed", "Remaining", "Ideal", "Status"
    ));
    lines.push(rule('-', 80));
    for day in &series.days {
        lines.push(format!(
            "{:<12} {:<6} {:<12.1} {:<12.1} {:<10.1} {:<10}",
            day.date.format("%Y-%m-%d").to_string(),
            day.day,
            day.completed,
            day.remaining,
            day.ideal,
            status_label(day.status)
        ));
    }

    lines.push(String::new());
    lines.push(heavy.clone());
    if !series.days.is_empty() {
        lines.push(format!(
            "Final Status: {:.1} / {} points completed ({:.1}%)",
            series.final_completed(),
            series.total_points,
            series.completion_pct()
        ));
        if series.finished() {
            lines.push("Sprint completed successfully!".to_string());
        } else if series.final_remaining() > 0.0 {
            lines.push(format!(
                "Sprint incomplete: {:.1} points remaining",
                series.final_remaining()
            ));
        }
    }
    lines.push(heavy);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::feature::Feature;
    use crate::types::report::{BurndownDay, CurrentSprint, HistoryRow};
    use chrono::NaiveDate;

    fn velocity(history: Vec<HistoryRow>, trend: Trend) -> VelocityReport {
        VelocityReport {
            project: "Atlas".to_string(),
            current_sprint: 4,
            current: Some(CurrentSprint {
                goal: "Ship onboarding".to_string(),
                capacity: 40.0,
            }),
            current_velocity: 30.0,
            history,
            rolling_average: 20.0,
            trend,
            recommended_capacity: 21,
        }
    }

    fn row(sprint: u32, completed: u32) -> HistoryRow {
        HistoryRow {
            sprint,
            planned: 25,
            completed,
            completion_rate: f64::from(completed) / 25.0 * 100.0,
        }
    }

    #[test]
    fn ranking_table_lists_features_in_rank_order() {
        let ranking = vec![
            RankedFeature {
                rank: 1,
                feature: Feature::new("Export", 500.0, 3.0, 100.0, 1.5).expect("valid"),
            },
            RankedFeature {
                rank: 2,
                feature: Feature::new("Search", 1000.0, 2.0, 80.0, 4.0).expect("valid"),
            },
        ];

        let rendered = ranking_table(&ranking);
        assert!(rendered.contains("PRIORITIZATION RESULTS"));
        let export = rendered.find("Export").expect("export row");
        let search = rendered.find("Search").expect("search row");
        assert!(export < search);
        assert!(rendered.contains("1000.00"));
        assert!(rendered.contains("400.00"));
    }

    #[test]
    fn velocity_report_with_full_history() {
        let report = velocity(vec![row(1, 10), row(2, 20), row(3, 30)], Trend::Increasing);
        let rendered = velocity_report(&report);

        assert!(rendered.contains("VELOCITY REPORT: Atlas"));
        assert!(rendered.contains("Completion Rate: 75.0%"));
        assert!(rendered.contains("3-Sprint Rolling Average: 20.0 points"));
        assert!(rendered.contains("Velocity Trend: INCREASING"));
        assert!(rendered.contains("Next Sprint Capacity: 21 points"));
        assert!(rendered.contains("Consider slight capacity increase"));
    }

    #[test]
    fn velocity_report_degrades_with_short_history() {
        let report = velocity(vec![row(1, 25)], Trend::InsufficientData);
        let rendered = velocity_report(&report);
        assert!(rendered.contains("Single Sprint Velocity: 25 points"));
        assert!(rendered.contains("(Need 3 sprints for rolling average)"));
        assert!(rendered.contains("Using last sprint velocity as baseline."));

        let empty = velocity(vec![], Trend::InsufficientData);
        let rendered = velocity_report(&empty);
        assert!(rendered.contains("No velocity history available."));
        assert!(rendered.contains("Insufficient data for velocity metrics."));
        assert!(rendered.contains("conservative default capacity"));
    }

    #[test]
    fn burndown_table_includes_rows_and_summary() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let series = BurndownSeries {
            sprint: 3,
            total_points: 20.0,
            duration_days: 1,
            days: vec![
                BurndownDay {
                    date: start,
                    day: 0,
                    remaining: 20.0,
                    ideal: 20.0,
                    completed: 0.0,
                    status: DayStatus::OnTrack,
                },
                BurndownDay {
                    date: start.succ_opt().expect("next day"),
                    day: 1,
                    remaining: 5.0,
                    ideal: 0.0,
                    completed: 15.0,
                    status: DayStatus::Behind,
                },
            ],
        };
        let sprint = Sprint {
            number: Some(3),
            sprint_goal: Some("Billing".to_string()),
            ..Sprint::default()
        };

        let rendered = burndown_table(&series, &sprint);
        assert!(rendered.contains("SPRINT 3 BURNDOWN CHART"));
        assert!(rendered.contains("Sprint Goal: Billing"));
        assert!(rendered.contains("2024-01-02"));
        assert!(rendered.contains("ON TRACK"));
        assert!(rendered.contains("Final Status: 15.0 / 20 points completed (75.0%)"));
        assert!(rendered.contains("Sprint incomplete: 5.0 points remaining"));
    }

    #[test]
    fn burndown_table_omits_incomplete_line_when_overshot() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 5).expect("valid date");
        let series = BurndownSeries {
            sprint: 5,
            total_points: 10.0,
            duration_days: 0,
            days: vec![BurndownDay {
                date: start,
                day: 0,
                remaining: -2.0,
                ideal: 10.0,
                completed: 12.0,
                status: DayStatus::Ahead,
            }],
        };
        let sprint = Sprint {
            number: Some(5),
            ..Sprint::default()
        };

        let rendered = burndown_table(&series, &sprint);
        assert!(rendered.contains("Final Status: 12.0 / 10 points completed"));
        assert!(!rendered.contains("Sprint incomplete"));
        assert!(!rendered.contains("Sprint completed successfully!"));
    }
}
