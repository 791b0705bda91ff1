use crate::equipment::{parse_weight_notation, WeightToken};
use crate::error::Warning;
use crate::exercise::ExerciseId;
use crate::metrics::{Reps, Rpe, Time};
use crate::session::{ExerciseEntry, SetLoad, SetRecord};

impl ExerciseId {
    /// Resolves the free-form display names used by legacy logs, including
    /// the spelling variants that accumulated over time. Import-time concern
    /// only; live records carry the identifier itself.
    #[must_use]
    pub fn from_legacy_name(name: &str) -> Option<ExerciseId> {
        match name.trim().to_lowercase().as_str() {
            "squat" | "back squat" | "barbell squat" => Some(ExerciseId::Squat),
            "bench press" | "bench" | "barbell bench press" => Some(ExerciseId::BenchPress),
            "deadlift" => Some(ExerciseId::Deadlift),
            "overhead press" | "ohp" | "shoulder press" => Some(ExerciseId::OverheadPress),
            "bent-over row" | "bent over row" | "barbell row" | "barbell rows" => {
                Some(ExerciseId::BentOverRow)
            }
            "dumbbell bench press" | "db bench press" => Some(ExerciseId::DumbbellBenchPress),
            "dumbbell shoulder press" | "db shoulder press" => {
                Some(ExerciseId::DumbbellShoulderPress)
            }
            "dumbbell curl" | "db curl" | "bicep curl" => Some(ExerciseId::DumbbellCurl),
            "lateral raise" | "side raise" => Some(ExerciseId::LateralRaise),
            "one-arm dumbbell row" | "one arm dumbbell row" | "dumbbell row" | "db row" => {
                Some(ExerciseId::DumbbellRow)
            }
            "goblet squat" => Some(ExerciseId::GobletSquat),
            "kettlebell swing" | "kb swing" => Some(ExerciseId::KettlebellSwing),
            "farmer's carry" | "farmers carry" | "farmer carry" => Some(ExerciseId::FarmersCarry),
            "suitcase carry" => Some(ExerciseId::SuitcaseCarry),
            "plank" => Some(ExerciseId::Plank),
            "push-up" | "push up" | "pushup" | "push-ups" | "pushups" => Some(ExerciseId::PushUp),
            "pull-up" | "pull up" | "pullup" | "pull-ups" | "pullups" => Some(ExerciseId::PullUp),
            "band pull-apart" | "band pull apart" => Some(ExerciseId::BandPullApart),
            "weighted sit-up" | "weighted sit up" | "weighted situp" => {
                Some(ExerciseId::WeightedSitUp)
            }
            "russian twist" => Some(ExerciseId::RussianTwist),
            _ => None,
        }
    }
}

/// One set as found in a legacy log, with the weight still in its raw
/// notation.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacySet {
    pub weight: Option<WeightToken>,
    pub reps: Option<Reps>,
    pub time: Option<Time>,
    pub is_failure: bool,
    pub completed: bool,
    pub rpe: Option<Rpe>,
}

/// Converts one legacy exercise entry into a typed one.
///
/// The display name is canonicalized to a known exercise and each raw weight
/// token runs through the notation parser. Distinct left/right weights
/// become dual loads, everything else a single load. Unknown names yield no
/// entry. Warnings carry the exercise so callers can attribute them.
#[must_use]
pub fn import_entry(name: &str, sets: &[LegacySet]) -> (Option<ExerciseEntry>, Vec<Warning>) {
    let Some(exercise_id) = ExerciseId::from_legacy_name(name) else {
        return (
            None,
            vec![Warning::UnknownExercise {
                name: name.to_string(),
            }],
        );
    };

    let mut warnings = Vec::new();
    let sets = sets
        .iter()
        .map(|legacy| SetRecord {
            load: legacy
                .weight
                .as_ref()
                .and_then(|token| import_load(token, exercise_id, &mut warnings)),
            reps: legacy.reps,
            time: legacy.time,
            is_failure: legacy.is_failure,
            completed: legacy.completed,
            rpe: legacy.rpe,
        })
        .collect();

    (Some(ExerciseEntry::new(exercise_id, sets)), warnings)
}

fn import_load(
    token: &WeightToken,
    exercise_id: ExerciseId,
    warnings: &mut Vec<Warning>,
) -> Option<SetLoad> {
    let parsed = parse_weight_notation(token);

    if let Some(Warning::UnparsableWeight { token, .. }) = parsed.warning {
        warnings.push(Warning::UnparsableWeight {
            exercise: Some(exercise_id),
            token,
        });
    }

    match (parsed.weight, parsed.left_right) {
        (Some(weight), _) => Some(SetLoad::Single(weight)),
        (None, Some((left, right))) => Some(SetLoad::Dual { left, right }),
        (None, None) => None,
    }
}
