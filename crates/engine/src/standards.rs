use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::exercise::{ExerciseId, Property};
use crate::metrics::BodyWeight;
use crate::rules::RuleRegistry;
use crate::session::WorkoutSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl Property for Sex {
    fn iter() -> std::slice::Iter<'static, Sex> {
        static SEXES: [Sex; 2] = [Sex::Female, Sex::Male];
        SEXES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

/// The five lifts covered by the strength standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lift {
    Squat,
    BenchPress,
    Deadlift,
    OverheadPress,
    BentOverRow,
}

impl Lift {
    #[must_use]
    pub fn exercise(self) -> ExerciseId {
        match self {
            Lift::Squat => ExerciseId::Squat,
            Lift::BenchPress => ExerciseId::BenchPress,
            Lift::Deadlift => ExerciseId::Deadlift,
            Lift::OverheadPress => ExerciseId::OverheadPress,
            Lift::BentOverRow => ExerciseId::BentOverRow,
        }
    }

    #[must_use]
    pub fn of_exercise(exercise_id: ExerciseId) -> Option<Lift> {
        match exercise_id {
            ExerciseId::Squat => Some(Lift::Squat),
            ExerciseId::BenchPress => Some(Lift::BenchPress),
            ExerciseId::Deadlift => Some(Lift::Deadlift),
            ExerciseId::OverheadPress => Some(Lift::OverheadPress),
            ExerciseId::BentOverRow => Some(Lift::BentOverRow),
            _ => None,
        }
    }
}

impl Property for Lift {
    fn iter() -> std::slice::Iter<'static, Lift> {
        static LIFTS: [Lift; 5] = [
            Lift::Squat,
            Lift::BenchPress,
            Lift::Deadlift,
            Lift::OverheadPress,
            Lift::BentOverRow,
        ];
        LIFTS.iter()
    }

    fn name(self) -> &'static str {
        self.exercise().name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Untrained = 1,
    Novice = 2,
    Intermediate = 3,
    Advanced = 4,
    Elite = 5,
}

impl Level {
    #[must_use]
    pub fn score(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn next(self) -> Option<Level> {
        match self {
            Level::Untrained => Some(Level::Novice),
            Level::Novice => Some(Level::Intermediate),
            Level::Intermediate => Some(Level::Advanced),
            Level::Advanced => Some(Level::Elite),
            Level::Elite => None,
        }
    }
}

impl Property for Level {
    fn iter() -> std::slice::Iter<'static, Level> {
        static LEVELS: [Level; 5] = [
            Level::Untrained,
            Level::Novice,
            Level::Intermediate,
            Level::Advanced,
            Level::Elite,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Untrained => "Untrained",
            Level::Novice => "Novice",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Elite => "Elite",
        }
    }
}

/// Weight-to-body-weight ratio thresholds per level, ordered from untrained
/// to elite and strictly increasing.
#[must_use]
pub fn lift_thresholds(sex: Sex, lift: Lift) -> [f32; 5] {
    match (sex, lift) {
        (Sex::Female, Lift::Squat) => [0.35, 0.55, 0.90, 1.25, 1.60],
        (Sex::Female, Lift::BenchPress) => [0.25, 0.40, 0.65, 0.90, 1.15],
        (Sex::Female, Lift::Deadlift) => [0.45, 0.70, 1.10, 1.50, 1.90],
        (Sex::Female, Lift::OverheadPress) => [0.20, 0.35, 0.50, 0.70, 0.85],
        (Sex::Female, Lift::BentOverRow) => [0.25, 0.45, 0.65, 0.90, 1.10],
        (Sex::Male, Lift::Squat) => [0.50, 0.75, 1.25, 1.75, 2.25],
        (Sex::Male, Lift::BenchPress) => [0.35, 0.60, 1.00, 1.40, 1.75],
        (Sex::Male, Lift::Deadlift) => [0.60, 1.00, 1.50, 2.00, 2.50],
        (Sex::Male, Lift::OverheadPress) => [0.25, 0.45, 0.65, 0.90, 1.10],
        (Sex::Male, Lift::BentOverRow) => [0.35, 0.60, 0.90, 1.20, 1.50],
    }
}

/// Highest level whose threshold the weight-to-body-weight ratio meets or
/// exceeds. Thresholds are inclusive; a ratio below the novice threshold is
/// untrained.
#[must_use]
pub fn classify(weight: f32, body_weight: BodyWeight, lift: Lift, sex: Sex) -> Level {
    let ratio = weight / f32::from(body_weight);
    let thresholds = lift_thresholds(sex, lift);
    [
        Level::Elite,
        Level::Advanced,
        Level::Intermediate,
        Level::Novice,
    ]
    .into_iter()
    .find(|level| ratio >= thresholds[level.score() - 1])
    .unwrap_or(Level::Untrained)
}

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, PartialEq)]
pub struct LevelProgress {
    pub next_level: Option<Level>,
    /// 0 to 100, capped.
    pub progress_pct: u8,
    pub next_weight: f32,
}

/// Progress from the current classification toward the next level. At elite
/// there is nothing left to reach and progress is pegged at 100.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_to_next(
    weight: f32,
    body_weight: BodyWeight,
    lift: Lift,
    sex: Sex,
) -> LevelProgress {
    let Some(next_level) = classify(weight, body_weight, lift, sex).next() else {
        return LevelProgress {
            next_level: None,
            progress_pct: 100,
            next_weight: weight,
        };
    };

    let ratio = weight / f32::from(body_weight);
    let next_threshold = lift_thresholds(sex, lift)[next_level.score() - 1];

    LevelProgress {
        next_level: Some(next_level),
        progress_pct: (ratio / next_threshold * 100.0).round().min(100.0) as u8,
        next_weight: (next_threshold * f32::from(body_weight)).round(),
    }
}

/// Buckets the average per-lift score back into a single level.
#[must_use]
pub fn overall_level(levels: &[Level]) -> Level {
    if levels.is_empty() {
        return Level::Untrained;
    }

    #[allow(clippy::cast_precision_loss)]
    let avg = levels.iter().map(|l| l.score() as f32).sum::<f32>() / levels.len() as f32;

    if avg >= 4.5 {
        Level::Elite
    } else if avg >= 3.5 {
        Level::Advanced
    } else if avg >= 2.5 {
        Level::Intermediate
    } else if avg >= 1.5 {
        Level::Novice
    } else {
        Level::Untrained
    }
}

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, PartialEq)]
pub struct LiftAssessment {
    pub lift: Lift,
    pub level: Level,
    /// Weight-to-body-weight ratio, formatted with two decimals for display.
    pub ratio: String,
    pub progress: LevelProgress,
}

#[must_use]
pub fn assess(weight: f32, body_weight: BodyWeight, lift: Lift, sex: Sex) -> LiftAssessment {
    let ratio = weight / f32::from(body_weight);
    LiftAssessment {
        lift,
        level: classify(weight, body_weight, lift, sex),
        ratio: format!("{ratio:.2}"),
        progress: progress_to_next(weight, body_weight, lift, sex),
    }
}

#[must_use]
pub fn lift_assessments(
    max_weights: &BTreeMap<Lift, f32>,
    body_weight: BodyWeight,
    sex: Sex,
) -> Vec<LiftAssessment> {
    max_weights
        .iter()
        .map(|(lift, weight)| assess(*weight, body_weight, *lift, sex))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    History,
    Manual,
}

impl DataSource {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DataSource::History => "workout history",
            DataSource::Manual => "manual entry",
        }
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone)]
pub struct StrengthSummary {
    pub max_weights: BTreeMap<Lift, f32>,
    pub body_weight: Option<f32>,
    pub data_source: DataSource,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Best canonical total weight per standards lift across the whole history,
/// stamped with the date of the latest session that set or raised a lift
/// maximum and tagged with the provenance of the underlying records.
#[must_use]
pub fn strength_summary(
    registry: &RuleRegistry,
    sessions: &[WorkoutSession],
    body_weight: Option<BodyWeight>,
    data_source: DataSource,
) -> StrengthSummary {
    let mut max_weights = BTreeMap::new();
    let mut last_date: Option<NaiveDate> = None;

    for session in sessions {
        for entry in &session.exercises {
            let Some(lift) = Lift::of_exercise(entry.exercise_id) else {
                continue;
            };
            let rule = registry.resolve(entry.exercise_id);
            let best = entry
                .sets
                .iter()
                .map(|set| rule.total_weight(set.load.as_ref()))
                .fold(0.0_f32, f32::max);
            if best <= 0.0 {
                continue;
            }

            let slot = max_weights.entry(lift).or_insert(0.0);
            if best > *slot {
                *slot = best;
                last_date = Some(last_date.map_or(session.date, |d| d.max(session.date)));
            }
        }
    }

    StrengthSummary {
        max_weights,
        body_weight: body_weight.map(f32::from),
        data_source,
        last_updated: last_date.map(|d| d.and_time(NaiveTime::MIN).and_utc()),
    }
}
