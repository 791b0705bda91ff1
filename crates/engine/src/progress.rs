use chrono::NaiveDate;

use crate::exercise::ExerciseId;
use crate::metrics::{Rpe, Time};
use crate::rules::RuleRegistry;
use crate::session::WorkoutSession;

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone)]
pub struct ProgressDataPoint {
    pub date: NaiveDate,
    pub weight: f32,
    pub reps: u32,
    pub volume: f32,
    pub rpe: Option<Rpe>,
    pub time: Option<Time>,
    pub is_failure: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct ExerciseProgress {
    pub series: Vec<ProgressDataPoint>,
    pub trend: Trend,
    pub max_weight: f32,
    pub max_volume: f32,
    pub max_reps: u32,
    pub best_time: Option<Time>,
    pub avg_rpe: Option<f32>,
}

/// Time-ordered series of every recorded set of one exercise across the
/// whole history, with personal records and the recent volume trend.
#[must_use]
pub fn exercise_progress(
    exercise_id: ExerciseId,
    sessions: &[WorkoutSession],
    registry: &RuleRegistry,
) -> ExerciseProgress {
    let rule = registry.resolve(exercise_id);

    let mut series = Vec::new();
    for session in sessions {
        for entry in session
            .exercises
            .iter()
            .filter(|e| e.exercise_id == exercise_id)
        {
            for set in &entry.sets {
                series.push(ProgressDataPoint {
                    date: session.date,
                    weight: rule.total_weight(set.load.as_ref()),
                    reps: set.reps.map_or(0, u32::from),
                    volume: rule.set_volume(set),
                    rpe: set.rpe,
                    time: set.time,
                    is_failure: set.is_failure,
                });
            }
        }
    }
    series.sort_by_key(|p| p.date);

    ExerciseProgress {
        trend: trend_of(&series),
        max_weight: series.iter().map(|p| p.weight).fold(0.0_f32, f32::max),
        max_volume: series.iter().map(|p| p.volume).fold(0.0_f32, f32::max),
        max_reps: series.iter().map(|p| p.reps).max().unwrap_or(0),
        best_time: series.iter().filter_map(|p| p.time).max(),
        avg_rpe: Rpe::avg(&series.iter().filter_map(|p| p.rpe).collect::<Vec<_>>()),
        series,
    }
}

/// Volume trend over the last five data points. The window is split into two
/// halves, with the extra element going to the second half on odd counts; a
/// mean shift beyond 5% in either direction counts as a trend. Fewer than
/// two points are always stable.
#[must_use]
pub fn trend_of(series: &[ProgressDataPoint]) -> Trend {
    if series.len() < 2 {
        return Trend::Stable;
    }

    let recent = &series[series.len().saturating_sub(5)..];
    let mid = recent.len() / 2;
    let first = mean(&recent[..mid]);
    let second = mean(&recent[mid..]);

    if first == 0.0 {
        return if second > 0.0 {
            Trend::Increasing
        } else {
            Trend::Stable
        };
    }

    let change = (second - first) / first;
    if change > 0.05 {
        Trend::Increasing
    } else if change < -0.05 {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(points: &[ProgressDataPoint]) -> f32 {
    points.iter().map(|p| p.volume).sum::<f32>() / points.len() as f32
}
