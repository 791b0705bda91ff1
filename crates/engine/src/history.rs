use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, NaiveDate};

use crate::rules::RuleRegistry;
use crate::session::WorkoutSession;

/// Monday of the week containing the date. A Sunday belongs to the week that
/// started the preceding Monday.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(date)
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct WeekBucket<'a> {
    pub week_start: NaiveDate,
    pub sessions: Vec<&'a WorkoutSession>,
}

/// Groups sessions into Monday-anchored calendar weeks, most recent week
/// first. Within a week, sessions are ordered by date ascending.
#[must_use]
pub fn group_by_week(sessions: &[WorkoutSession]) -> Vec<WeekBucket<'_>> {
    let mut weeks: BTreeMap<NaiveDate, Vec<&WorkoutSession>> = BTreeMap::new();

    for session in sessions {
        weeks
            .entry(week_start(session.date))
            .or_default()
            .push(session);
    }

    weeks
        .into_iter()
        .rev()
        .map(|(week_start, mut sessions)| {
            sessions.sort_by_key(|s| s.date);
            WeekBucket {
                week_start,
                sessions,
            }
        })
        .collect()
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct WeekStats {
    pub total_workouts: usize,
    pub total_volume: f32,
    pub avg_duration_minutes: f32,
}

/// Summary statistics over one group of sessions. The duration average
/// divides by the number of sessions; sessions without a recorded duration
/// contribute zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn week_stats(sessions: &[&WorkoutSession], registry: &RuleRegistry) -> WeekStats {
    if sessions.is_empty() {
        return WeekStats {
            total_workouts: 0,
            total_volume: 0.0,
            avg_duration_minutes: 0.0,
        };
    }

    let total_duration = sessions
        .iter()
        .filter_map(|s| s.duration_minutes)
        .sum::<u32>();

    WeekStats {
        total_workouts: sessions.len(),
        total_volume: sessions.iter().map(|s| s.total_volume(registry)).sum(),
        avg_duration_minutes: total_duration as f32 / sessions.len() as f32,
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct WeekSummary {
    pub week_start: NaiveDate,
    pub stats: WeekStats,
}

#[must_use]
pub fn week_summaries(sessions: &[WorkoutSession], registry: &RuleRegistry) -> Vec<WeekSummary> {
    group_by_week(sessions)
        .into_iter()
        .map(|bucket| WeekSummary {
            week_start: bucket.week_start,
            stats: week_stats(&bucket.sessions, registry),
        })
        .collect()
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct TrainingRollup {
    pub total_workouts: usize,
    pub total_volume_lbs: f32,
    pub avg_duration_minutes: f32,
    pub consistency_pct: u8,
}

/// Rollup over the `weeks` most recent calendar weeks, ending with the week
/// containing `today`. Consistency is the share of those weeks with at least
/// one session.
#[must_use]
pub fn training_rollup(
    sessions: &[WorkoutSession],
    registry: &RuleRegistry,
    weeks: u32,
    today: NaiveDate,
) -> TrainingRollup {
    if weeks == 0 {
        return TrainingRollup {
            total_workouts: 0,
            total_volume_lbs: 0.0,
            avg_duration_minutes: 0.0,
            consistency_pct: 0,
        };
    }

    let current_week = week_start(today);
    let first_week = current_week
        .checked_sub_days(Days::new(u64::from(weeks - 1) * 7))
        .unwrap_or(current_week);

    let in_window = sessions
        .iter()
        .filter(|s| {
            let week = week_start(s.date);
            week >= first_week && week <= current_week
        })
        .collect::<Vec<_>>();

    let stats = week_stats(&in_window, registry);
    let weeks_trained = in_window
        .iter()
        .map(|s| week_start(s.date))
        .collect::<BTreeSet<_>>()
        .len();

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let consistency_pct = (weeks_trained as f32 / weeks as f32 * 100.0).round() as u8;

    TrainingRollup {
        total_workouts: stats.total_workouts,
        total_volume_lbs: stats.total_volume,
        avg_duration_minutes: stats.avg_duration_minutes,
        consistency_pct,
    }
}
