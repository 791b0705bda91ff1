use std::collections::BTreeSet;

use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::exercise::{ExerciseId, Property};
use crate::metrics::{Reps, Rpe, Time, Weight};
use crate::rules::RuleRegistry;

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SessionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SessionId {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Load moved during a set. Symmetric work carries one weight; exercises
/// performed with a different weight per hand carry both, which rules out
/// records that mix a single weight with left/right values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetLoad {
    Single(Weight),
    Dual { left: Weight, right: Weight },
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SetRecord {
    pub load: Option<SetLoad>,
    pub reps: Option<Reps>,
    pub time: Option<Time>,
    pub is_failure: bool,
    pub completed: bool,
    pub rpe: Option<Rpe>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BandResistance {
    Light,
    Medium,
    Heavy,
    ExtraHeavy,
}

impl Property for BandResistance {
    fn iter() -> std::slice::Iter<'static, BandResistance> {
        static BAND_RESISTANCES: [BandResistance; 4] = [
            BandResistance::Light,
            BandResistance::Medium,
            BandResistance::Heavy,
            BandResistance::ExtraHeavy,
        ];
        BAND_RESISTANCES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BandResistance::Light => "Light",
            BandResistance::Medium => "Medium",
            BandResistance::Heavy => "Heavy",
            BandResistance::ExtraHeavy => "Extra Heavy",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    pub exercise_id: ExerciseId,
    pub sets: Vec<SetRecord>,
    pub use_bosu_ball: bool,
    pub band: Option<BandResistance>,
    pub notes: Option<String>,
}

impl ExerciseEntry {
    #[must_use]
    pub fn new(exercise_id: ExerciseId, sets: Vec<SetRecord>) -> Self {
        Self {
            exercise_id,
            sets,
            use_bosu_ball: false,
            band: None,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayType {
    Push,
    Pull,
    Legs,
    Upper,
    Lower,
    FullBody,
    Conditioning,
}

impl Property for DayType {
    fn iter() -> std::slice::Iter<'static, DayType> {
        static DAY_TYPES: [DayType; 7] = [
            DayType::Push,
            DayType::Pull,
            DayType::Legs,
            DayType::Upper,
            DayType::Lower,
            DayType::FullBody,
            DayType::Conditioning,
        ];
        DAY_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            DayType::Push => "Push",
            DayType::Pull => "Pull",
            DayType::Legs => "Legs",
            DayType::Upper => "Upper",
            DayType::Lower => "Lower",
            DayType::FullBody => "Full Body",
            DayType::Conditioning => "Conditioning",
        }
    }
}

/// Snapshot of one training session. The engine only ever reads these;
/// creating and persisting them is the storage layer's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: SessionId,
    pub date: NaiveDate,
    pub day_type: DayType,
    pub exercises: Vec<ExerciseEntry>,
    pub duration_minutes: Option<u32>,
}

impl WorkoutSession {
    #[must_use]
    pub fn exercise_ids(&self) -> BTreeSet<ExerciseId> {
        self.exercises.iter().map(|e| e.exercise_id).collect()
    }

    #[must_use]
    pub fn entry(&self, exercise_id: ExerciseId) -> Option<&ExerciseEntry> {
        self.exercises
            .iter()
            .find(|e| e.exercise_id == exercise_id)
    }

    #[must_use]
    pub fn num_completed_sets(&self) -> usize {
        self.exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter(|s| s.completed)
            .count()
    }

    /// Training volume of the whole session, summed over every recorded set.
    #[must_use]
    pub fn total_volume(&self, registry: &RuleRegistry) -> f32 {
        self.exercises
            .iter()
            .map(|e| {
                let rule = registry.resolve(e.exercise_id);
                e.sets.iter().map(|s| rule.set_volume(s)).sum::<f32>()
            })
            .sum()
    }

    #[must_use]
    pub fn avg_rpe(&self) -> Option<f32> {
        Rpe::avg(
            &self
                .exercises
                .iter()
                .flat_map(|e| &e.sets)
                .filter_map(|s| s.rpe)
                .collect::<Vec<_>>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    fn set(weight: f32, reps: u32, completed: bool, rpe: Option<f32>) -> SetRecord {
        SetRecord {
            load: Some(SetLoad::Single(Weight::new(weight).unwrap())),
            reps: Some(Reps::new(reps).unwrap()),
            time: None,
            is_failure: false,
            completed,
            rpe: rpe.map(|r| Rpe::new(r).unwrap()),
        }
    }

    fn session() -> WorkoutSession {
        WorkoutSession {
            id: 1.into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            day_type: DayType::Push,
            exercises: vec![
                ExerciseEntry::new(
                    ExerciseId::BenchPress,
                    vec![
                        set(135.0, 5, true, Some(7.0)),
                        set(135.0, 5, false, Some(8.0)),
                    ],
                ),
                ExerciseEntry::new(ExerciseId::LateralRaise, vec![set(15.0, 12, true, None)]),
            ],
            duration_minutes: Some(45),
        }
    }

    #[test]
    fn test_session_id_nil() {
        assert!(SessionId::nil().is_nil());
        assert!(!SessionId::from(2u128).is_nil());
    }

    #[test]
    fn test_exercise_ids() {
        assert_eq!(
            session().exercise_ids(),
            BTreeSet::from([ExerciseId::BenchPress, ExerciseId::LateralRaise])
        );
    }

    #[test]
    fn test_entry() {
        let session = session();
        assert_eq!(
            session.entry(ExerciseId::BenchPress).map(|e| e.sets.len()),
            Some(2)
        );
        assert_eq!(session.entry(ExerciseId::Squat), None);
    }

    #[test]
    fn test_num_completed_sets() {
        assert_eq!(session().num_completed_sets(), 2);
    }

    #[test]
    fn test_total_volume() {
        // 135 * 5 + 135 * 5 + 15 * 2 * 12
        assert_approx_eq!(
            session().total_volume(RuleRegistry::builtin()),
            1710.0,
            0.001
        );
    }

    #[test]
    fn test_avg_rpe() {
        assert_approx_eq!(session().avg_rpe().unwrap(), 7.5, 0.001);
        assert_eq!(
            WorkoutSession {
                id: SessionId::nil(),
                date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                day_type: DayType::Pull,
                exercises: vec![],
                duration_minutes: None,
            }
            .avg_rpe(),
            None
        );
    }
}
