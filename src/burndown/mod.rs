pub mod dates;

use crate::error::{Result, SprintKitError};
use crate::types::report::{BurndownDay, BurndownSeries, DayStatus};
use crate::types::sprint::{Snapshot, Sprint, StatusFile};
use chrono::NaiveDate;
use dates::parse_date;

pub fn select_sprint(status: &StatusFile, number: Option<u32>) -> Result<&Sprint> {
    match number {
        Some(number) => status
            .sprint(number)
            .ok_or(SprintKitError::SprintNotFound(number)),
        None => status.current().ok_or(SprintKitError::NoCurrentSprint),
    }
}

pub fn ideal_line(total: f64, duration: i64) -> Vec<f64> {
    if duration <= 0 {
        return vec![total];
    }
    let per_day = total / duration as f64;
    (0..=duration)
        .map(|day| ((total - per_day * day as f64) * 10.0).round_ties_even() / 10.0)
        .collect()
}

pub fn generate(sprint: &Sprint) -> Result<BurndownSeries> {
    let number = sprint.number.unwrap_or(0);
    let start = sprint.start_date.as_deref().and_then(parse_date);
    let end = sprint.end_date.as_deref().and_then(parse_date);
    let (Some(start), Some(end)) = (start, end) else {
        return Err(SprintKitError::MissingSprintDates(number));
    };
    if end < start {
        return Err(SprintKitError::InvalidSprintRange {
            sprint: number,
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let duration = (end - start).num_days();
    let total = sprint.total_points();
    let ideal = ideal_line(total, duration);
    let snapshots = dated_snapshots(&sprint.burndown);

    let mut days: Vec<BurndownDay> = Vec::with_capacity(duration as usize + 1);
    for (day, date) in start.iter_days().take(duration as usize + 1).enumerate() {
        let (remaining, completed) = match snapshots.iter().find(|(on, _)| *on == date) {
            Some((_, snapshot)) => (snapshot.remaining_points, snapshot.completed_points),
            None => match days.last() {
                Some(previous) => (previous.remaining, previous.completed),
                None => (total, 0.0),
            },
        };
        let ideal_remaining = ideal.get(day).copied().unwrap_or(0.0);

        days.push(BurndownDay {
            date,
            day,
            remaining,
            ideal: ideal_remaining,
            completed,
            status: DayStatus::classify(remaining, ideal_remaining),
        });
    }

    tracing::info!(
        sprint = number,
        days = days.len(),
        snapshots = snapshots.len(),
        "burndown series generated"
    );

    Ok(BurndownSeries {
        sprint: number,
        total_points: total,
        duration_days: duration,
        days,
    })
}

/// Snapshots with a usable date, in file order; the rest are dropped.
fn dated_snapshots(entries: &[Snapshot]) -> Vec<(NaiveDate, &Snapshot)> {
    entries
        .iter()
        .filter_map(|entry| {
            let parsed = entry.date.as_deref().and_then(parse_date);
            if parsed.is_none() {
                tracing::debug!(date = ?entry.date, "ignoring burndown entry with unparseable date");
            }
            parsed.map(|date| (date, entry))
        })
        .collect()
}
