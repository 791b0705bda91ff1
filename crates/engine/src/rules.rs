use std::collections::{BTreeMap, BTreeSet};

use crate::equipment::EquipmentKind;
use crate::error::Warning;
use crate::exercise::{ExerciseId, TrackingType};
use crate::session::{SetLoad, SetRecord};

/// Assumed lifter body weight in pounds, credited as the load of
/// bodyweight-only movements.
pub const ESTIMATED_BODY_WEIGHT_LBS: f32 = 185.0;

/// Equipment defaults for one exercise. The registry hands these out; they
/// are fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseRule {
    pub exercise_id: ExerciseId,
    pub default_equipment: EquipmentKind,
    pub weight_multiplier: u32,
    pub tracking_type: TrackingType,
    pub supports_dual_weights: bool,
}

impl ExerciseRule {
    /// Rule applied when an exercise has no registered entry.
    #[must_use]
    pub fn fallback(exercise_id: ExerciseId) -> Self {
        Self {
            exercise_id,
            default_equipment: EquipmentKind::Barbell,
            weight_multiplier: 1,
            tracking_type: TrackingType::Reps,
            supports_dual_weights: false,
        }
    }

    /// Canonical load of one rep or one interval of a set.
    ///
    /// Bodyweight movements are credited with [`ESTIMATED_BODY_WEIGHT_LBS`]
    /// regardless of any recorded load. A dual load is the plain sum of both
    /// hands. The multiplier applies to single loads only, doubling
    /// symmetric per-hand work such as a pair of dumbbells.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_weight(&self, load: Option<&SetLoad>) -> f32 {
        if self.default_equipment == EquipmentKind::Bodyweight {
            return ESTIMATED_BODY_WEIGHT_LBS;
        }

        match load {
            Some(SetLoad::Dual { left, right }) => f32::from(*left) + f32::from(*right),
            Some(SetLoad::Single(weight)) => {
                f32::from(*weight) * self.weight_multiplier as f32
            }
            None => 0.0,
        }
    }

    /// Training volume of a set, in pound-reps for rep-tracked exercises and
    /// pound-minutes for time-tracked ones.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn set_volume(&self, set: &SetRecord) -> f32 {
        let total_weight = self.total_weight(set.load.as_ref());
        match self.tracking_type {
            TrackingType::Time => {
                u32::from(set.time.unwrap_or_default()) as f32 / 60.0 * total_weight
            }
            TrackingType::Reps | TrackingType::Failure => {
                total_weight * u32::from(set.reps.unwrap_or_default()) as f32
            }
        }
    }
}

const BUILTIN_RULES: [ExerciseRule; 20] = [
    ExerciseRule {
        exercise_id: ExerciseId::Squat,
        default_equipment: EquipmentKind::Barbell,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::BenchPress,
        default_equipment: EquipmentKind::Barbell,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::Deadlift,
        default_equipment: EquipmentKind::Barbell,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::OverheadPress,
        default_equipment: EquipmentKind::Barbell,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::BentOverRow,
        default_equipment: EquipmentKind::Barbell,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::DumbbellBenchPress,
        default_equipment: EquipmentKind::Dumbbell,
        weight_multiplier: 2,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: true,
    },
    ExerciseRule {
        exercise_id: ExerciseId::DumbbellShoulderPress,
        default_equipment: EquipmentKind::Dumbbell,
        weight_multiplier: 2,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: true,
    },
    ExerciseRule {
        exercise_id: ExerciseId::DumbbellCurl,
        default_equipment: EquipmentKind::Dumbbell,
        weight_multiplier: 2,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: true,
    },
    ExerciseRule {
        exercise_id: ExerciseId::LateralRaise,
        default_equipment: EquipmentKind::Dumbbell,
        weight_multiplier: 2,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: true,
    },
    ExerciseRule {
        exercise_id: ExerciseId::DumbbellRow,
        default_equipment: EquipmentKind::Dumbbell,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::GobletSquat,
        default_equipment: EquipmentKind::Kettlebell,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::KettlebellSwing,
        default_equipment: EquipmentKind::Kettlebell,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::FarmersCarry,
        default_equipment: EquipmentKind::Kettlebell,
        weight_multiplier: 2,
        tracking_type: TrackingType::Time,
        supports_dual_weights: true,
    },
    ExerciseRule {
        exercise_id: ExerciseId::SuitcaseCarry,
        default_equipment: EquipmentKind::Kettlebell,
        weight_multiplier: 1,
        tracking_type: TrackingType::Time,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::Plank,
        default_equipment: EquipmentKind::Bodyweight,
        weight_multiplier: 1,
        tracking_type: TrackingType::Time,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::PushUp,
        default_equipment: EquipmentKind::Bodyweight,
        weight_multiplier: 1,
        tracking_type: TrackingType::Failure,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::PullUp,
        default_equipment: EquipmentKind::Bodyweight,
        weight_multiplier: 1,
        tracking_type: TrackingType::Failure,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::BandPullApart,
        default_equipment: EquipmentKind::Band,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::WeightedSitUp,
        default_equipment: EquipmentKind::Plate,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
    ExerciseRule {
        exercise_id: ExerciseId::RussianTwist,
        default_equipment: EquipmentKind::Plate,
        weight_multiplier: 1,
        tracking_type: TrackingType::Reps,
        supports_dual_weights: false,
    },
];

static BUILTIN: std::sync::LazyLock<RuleRegistry> =
    std::sync::LazyLock::new(|| RuleRegistry::new(BUILTIN_RULES));

/// Immutable lookup of equipment defaults per exercise. Constructed once and
/// shared by reference; concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: BTreeMap<ExerciseId, ExerciseRule>,
}

impl RuleRegistry {
    pub fn new(rules: impl IntoIterator<Item = ExerciseRule>) -> Self {
        Self {
            rules: rules.into_iter().map(|r| (r.exercise_id, r)).collect(),
        }
    }

    /// Registry carrying the built-in rule for every known exercise.
    #[must_use]
    pub fn builtin() -> &'static RuleRegistry {
        &BUILTIN
    }

    #[must_use]
    pub fn get(&self, exercise_id: ExerciseId) -> Option<&ExerciseRule> {
        self.rules.get(&exercise_id)
    }

    /// Rule for the exercise, with barbell defaults for unregistered ones so
    /// a single gap never fails a whole aggregation. Gaps are reported
    /// separately by [`RuleRegistry::missing_rules`].
    #[must_use]
    pub fn resolve(&self, exercise_id: ExerciseId) -> ExerciseRule {
        self.get(exercise_id)
            .copied()
            .unwrap_or_else(|| ExerciseRule::fallback(exercise_id))
    }

    /// Warnings for the exercises without a registered rule, deduplicated.
    #[must_use]
    pub fn missing_rules(
        &self,
        exercise_ids: impl IntoIterator<Item = ExerciseId>,
    ) -> Vec<Warning> {
        exercise_ids
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter(|id| !self.rules.contains_key(id))
            .map(|exercise| Warning::MissingRule { exercise })
            .collect()
    }
}
