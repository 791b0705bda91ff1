use std::collections::BTreeMap;

use crate::equipment::EquipmentKind;
use crate::exercise::ExerciseId;
use crate::metrics::Rpe;
use crate::rules::RuleRegistry;
use crate::session::{SetLoad, WorkoutSession};

/// Proposes the next session's working weight from the last session's weight
/// and RPE.
///
/// An easy set earns an increase of up to 7.5%, a grinding set backs the
/// weight off by up to 7.5%. The change is clamped to at most 10% and 10 lbs
/// in either direction, then rounded to the plate granularity of the
/// equipment: 5 lbs for barbells, 2.5 lbs for dumbbells and kettlebells.
/// Equipment without meaningful load increments gets no suggestion and the
/// last weight is returned unchanged.
#[must_use]
pub fn suggest_next_weight(last_weight: f32, last_rpe: Rpe, equipment: EquipmentKind) -> f32 {
    let rpe = f32::from(last_rpe);
    let factor = if rpe <= 6.0 {
        1.075
    } else if rpe <= 7.0 {
        1.05
    } else if rpe <= 8.5 {
        1.0
    } else if rpe <= 9.0 {
        0.975
    } else {
        0.925
    };

    let suggested = last_weight * factor;
    let max_increase = (last_weight * 1.10).min(last_weight + 10.0);
    let min_decrease = (last_weight * 0.90).max(last_weight - 10.0);
    let adjusted = if suggested > last_weight {
        suggested.min(max_increase)
    } else {
        suggested.max(min_decrease)
    };

    match equipment {
        EquipmentKind::Barbell => (adjusted / 5.0).round() * 5.0,
        EquipmentKind::Dumbbell | EquipmentKind::Kettlebell => (adjusted / 2.5).round() * 2.5,
        EquipmentKind::Bodyweight | EquipmentKind::Plate | EquipmentKind::Band => last_weight,
    }
}

/// Suggested working weight per exercise, derived from the most recent
/// completed set with a single load. Exercises trained with equipment that
/// gets no suggestion are omitted. A set recorded without RPE yields its own
/// weight unchanged.
#[must_use]
pub fn suggested_weights(
    registry: &RuleRegistry,
    sessions: &[WorkoutSession],
) -> BTreeMap<ExerciseId, f32> {
    let mut sorted = sessions.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|s| s.date);

    let mut result = BTreeMap::new();

    for session in sorted.iter().rev() {
        for entry in &session.exercises {
            if result.contains_key(&entry.exercise_id) {
                continue;
            }

            let rule = registry.resolve(entry.exercise_id);
            if !matches!(
                rule.default_equipment,
                EquipmentKind::Barbell | EquipmentKind::Dumbbell | EquipmentKind::Kettlebell
            ) {
                continue;
            }

            let Some((weight, rpe)) = entry.sets.iter().rev().find_map(|set| {
                match (set.completed, set.load) {
                    (true, Some(SetLoad::Single(weight))) => Some((f32::from(weight), set.rpe)),
                    _ => None,
                }
            }) else {
                continue;
            };

            let suggestion = match rpe {
                Some(rpe) => suggest_next_weight(weight, rpe, rule.default_equipment),
                None => weight,
            };
            result.insert(entry.exercise_id, suggestion);
        }
    }

    result
}
