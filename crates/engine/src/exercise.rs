use std::fmt;

/// Enum-backed catalog value with a stable iteration order and a display name.
pub trait Property {
    fn iter() -> std::slice::Iter<'static, Self>
    where
        Self: Sized;
    fn name(self) -> &'static str;
}

/// Every exercise the engine knows about. The progression rules, strength
/// standards and legacy import all key off this enum, so adding a variant
/// means touching the rule table as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExerciseId {
    Squat,
    BenchPress,
    Deadlift,
    OverheadPress,
    BentOverRow,
    DumbbellBenchPress,
    DumbbellShoulderPress,
    DumbbellCurl,
    LateralRaise,
    DumbbellRow,
    GobletSquat,
    KettlebellSwing,
    FarmersCarry,
    SuitcaseCarry,
    Plank,
    PushUp,
    PullUp,
    BandPullApart,
    WeightedSitUp,
    RussianTwist,
}

impl Property for ExerciseId {
    fn iter() -> std::slice::Iter<'static, ExerciseId> {
        static EXERCISE_IDS: [ExerciseId; 20] = [
            ExerciseId::Squat,
            ExerciseId::BenchPress,
            ExerciseId::Deadlift,
            ExerciseId::OverheadPress,
            ExerciseId::BentOverRow,
            ExerciseId::DumbbellBenchPress,
            ExerciseId::DumbbellShoulderPress,
            ExerciseId::DumbbellCurl,
            ExerciseId::LateralRaise,
            ExerciseId::DumbbellRow,
            ExerciseId::GobletSquat,
            ExerciseId::KettlebellSwing,
            ExerciseId::FarmersCarry,
            ExerciseId::SuitcaseCarry,
            ExerciseId::Plank,
            ExerciseId::PushUp,
            ExerciseId::PullUp,
            ExerciseId::BandPullApart,
            ExerciseId::WeightedSitUp,
            ExerciseId::RussianTwist,
        ];
        EXERCISE_IDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseId::Squat => "Squat",
            ExerciseId::BenchPress => "Bench Press",
            ExerciseId::Deadlift => "Deadlift",
            ExerciseId::OverheadPress => "Overhead Press",
            ExerciseId::BentOverRow => "Bent-over Row",
            ExerciseId::DumbbellBenchPress => "Dumbbell Bench Press",
            ExerciseId::DumbbellShoulderPress => "Dumbbell Shoulder Press",
            ExerciseId::DumbbellCurl => "Dumbbell Curl",
            ExerciseId::LateralRaise => "Lateral Raise",
            ExerciseId::DumbbellRow => "One-arm Dumbbell Row",
            ExerciseId::GobletSquat => "Goblet Squat",
            ExerciseId::KettlebellSwing => "Kettlebell Swing",
            ExerciseId::FarmersCarry => "Farmer's Carry",
            ExerciseId::SuitcaseCarry => "Suitcase Carry",
            ExerciseId::Plank => "Plank",
            ExerciseId::PushUp => "Push-up",
            ExerciseId::PullUp => "Pull-up",
            ExerciseId::BandPullApart => "Band Pull-apart",
            ExerciseId::WeightedSitUp => "Weighted Sit-up",
            ExerciseId::RussianTwist => "Russian Twist",
        }
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How performance on an exercise is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrackingType {
    /// Repetitions at a given load.
    Reps,
    /// Duration under load, e.g. carries and planks.
    Time,
    /// Reps to technical failure, without a target.
    Failure,
}

impl Property for TrackingType {
    fn iter() -> std::slice::Iter<'static, TrackingType> {
        static TRACKING_TYPES: [TrackingType; 3] =
            [TrackingType::Reps, TrackingType::Time, TrackingType::Failure];
        TRACKING_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            TrackingType::Reps => "Reps",
            TrackingType::Time => "Time",
            TrackingType::Failure => "To Failure",
        }
    }
}
