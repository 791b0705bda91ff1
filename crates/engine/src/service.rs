use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, error, warn};

use crate::error::{ReadError, StorageError, Warning};
use crate::exercise::ExerciseId;
use crate::history::{training_rollup, week_summaries, TrainingRollup, WeekSummary};
use crate::metrics::BodyWeight;
use crate::progress::{exercise_progress, ExerciseProgress};
use crate::progression::suggested_weights;
use crate::rules::RuleRegistry;
use crate::session::WorkoutSession;
use crate::standards::{
    lift_assessments, strength_summary, DataSource, LiftAssessment, Sex, StrengthSummary,
};

/// Lifter profile as stored by the data layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub sex: Sex,
    pub body_weight: Option<BodyWeight>,
}

#[allow(async_fn_in_trait)]
pub trait SessionRepository {
    async fn read_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ProfileRepository {
    async fn read_profile(&self) -> Result<Profile, ReadError>;
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::Storage(StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

/// Read-side facade over the data layer. Fetches the stored records and runs
/// the pure computations on them; derived values are recomputed on every
/// call and never cached.
pub struct Service<R> {
    repository: R,
    registry: RuleRegistry,
}

impl<R> Service<R>
where
    R: SessionRepository + ProfileRepository,
{
    pub fn new(repository: R, registry: RuleRegistry) -> Self {
        Self {
            repository,
            registry,
        }
    }

    pub async fn get_week_summaries(&self) -> Result<Vec<WeekSummary>, ReadError> {
        let sessions = log_on_error!(self.repository.read_sessions(), "read", "sessions")?;
        Ok(week_summaries(&sessions, &self.registry))
    }

    pub async fn get_training_rollup(
        &self,
        weeks: u32,
        today: NaiveDate,
    ) -> Result<TrainingRollup, ReadError> {
        let sessions = log_on_error!(self.repository.read_sessions(), "read", "sessions")?;
        Ok(training_rollup(&sessions, &self.registry, weeks, today))
    }

    pub async fn get_exercise_progress(
        &self,
        exercise_id: ExerciseId,
    ) -> Result<ExerciseProgress, ReadError> {
        let sessions = log_on_error!(self.repository.read_sessions(), "read", "sessions")?;
        Ok(exercise_progress(exercise_id, &sessions, &self.registry))
    }

    pub async fn get_suggested_weights(&self) -> Result<BTreeMap<ExerciseId, f32>, ReadError> {
        let sessions = log_on_error!(self.repository.read_sessions(), "read", "sessions")?;
        Ok(suggested_weights(&self.registry, &sessions))
    }

    pub async fn get_strength_summary(&self) -> Result<StrengthSummary, ReadError> {
        let profile = log_on_error!(self.repository.read_profile(), "read", "profile")?;
        let sessions = log_on_error!(self.repository.read_sessions(), "read", "sessions")?;
        Ok(strength_summary(
            &self.registry,
            &sessions,
            profile.body_weight,
            DataSource::History,
        ))
    }

    /// Per-lift strength assessment from the workout history. Fails with
    /// [`ReadError::NotFound`] when the profile has no body weight; the
    /// engine never substitutes one.
    pub async fn get_lift_assessments(&self) -> Result<Vec<LiftAssessment>, ReadError> {
        let profile = log_on_error!(self.repository.read_profile(), "read", "profile")?;
        let Some(body_weight) = profile.body_weight else {
            return Err(ReadError::NotFound);
        };
        let sessions = log_on_error!(self.repository.read_sessions(), "read", "sessions")?;
        let summary = strength_summary(
            &self.registry,
            &sessions,
            Some(body_weight),
            DataSource::History,
        );
        Ok(lift_assessments(
            &summary.max_weights,
            body_weight,
            profile.sex,
        ))
    }

    /// Data-quality check over the stored history: reports exercises that
    /// were logged but have no registered rule. Aggregations silently fall
    /// back to barbell defaults for those; this is where the gaps surface.
    pub async fn get_data_warnings(&self) -> Result<Vec<Warning>, ReadError> {
        let sessions = log_on_error!(self.repository.read_sessions(), "read", "sessions")?;
        let warnings = self
            .registry
            .missing_rules(sessions.iter().flat_map(WorkoutSession::exercise_ids));
        for warning in &warnings {
            warn!("{warning}");
        }
        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use crate::metrics::{Reps, Rpe, Weight};
    use crate::session::{DayType, ExerciseEntry, SessionId, SetLoad, SetRecord};
    use crate::standards::{Level, Lift};

    use super::*;

    struct FakeRepository {
        sessions: Vec<WorkoutSession>,
        profile: Profile,
    }

    impl SessionRepository for FakeRepository {
        async fn read_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError> {
            Ok(self.sessions.clone())
        }
    }

    impl ProfileRepository for FakeRepository {
        async fn read_profile(&self) -> Result<Profile, ReadError> {
            Ok(self.profile)
        }
    }

    struct DisconnectedRepository;

    impl SessionRepository for DisconnectedRepository {
        async fn read_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError> {
            Err(ReadError::Storage(StorageError::NoConnection))
        }
    }

    impl ProfileRepository for DisconnectedRepository {
        async fn read_profile(&self) -> Result<Profile, ReadError> {
            Err(ReadError::Storage(StorageError::NoConnection))
        }
    }

    fn set(weight: f32, reps: u32, rpe: f32) -> SetRecord {
        SetRecord {
            load: Some(SetLoad::Single(Weight::new(weight).unwrap())),
            reps: Some(Reps::new(reps).unwrap()),
            completed: true,
            rpe: Some(Rpe::new(rpe).unwrap()),
            ..SetRecord::default()
        }
    }

    fn repository(body_weight: Option<f32>) -> FakeRepository {
        FakeRepository {
            sessions: vec![
                WorkoutSession {
                    id: SessionId::from(1u128),
                    date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                    day_type: DayType::Legs,
                    exercises: vec![ExerciseEntry::new(
                        ExerciseId::Squat,
                        vec![set(300.0, 5, 8.0)],
                    )],
                    duration_minutes: Some(45),
                },
                WorkoutSession {
                    id: SessionId::from(2u128),
                    date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
                    day_type: DayType::Legs,
                    exercises: vec![ExerciseEntry::new(
                        ExerciseId::Squat,
                        vec![set(310.0, 5, 6.0)],
                    )],
                    duration_minutes: Some(50),
                },
            ],
            profile: Profile {
                sex: Sex::Male,
                body_weight: body_weight.map(|w| BodyWeight::new(w).unwrap()),
            },
        }
    }

    fn service(body_weight: Option<f32>) -> Service<FakeRepository> {
        Service::new(repository(body_weight), RuleRegistry::builtin().clone())
    }

    #[tokio::test]
    async fn test_get_week_summaries() {
        let summaries = service(Some(200.0)).get_week_summaries().await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(
            summaries[0].week_start,
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
        assert_approx_eq!(summaries[0].stats.total_volume, 1550.0, 0.001);
    }

    #[tokio::test]
    async fn test_get_training_rollup() {
        let rollup = service(Some(200.0))
            .get_training_rollup(2, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap())
            .await
            .unwrap();

        assert_eq!(rollup.total_workouts, 2);
        assert_eq!(rollup.consistency_pct, 100);
        assert_approx_eq!(rollup.avg_duration_minutes, 47.5, 0.001);
    }

    #[tokio::test]
    async fn test_get_exercise_progress() {
        let progress = service(Some(200.0))
            .get_exercise_progress(ExerciseId::Squat)
            .await
            .unwrap();

        assert_eq!(progress.series.len(), 2);
        assert_approx_eq!(progress.max_weight, 310.0, 0.001);
    }

    #[tokio::test]
    async fn test_get_suggested_weights() {
        let suggested = service(Some(200.0)).get_suggested_weights().await.unwrap();

        // last squat session: 310 at RPE 6, clamped to +10 lbs
        assert_approx_eq!(suggested[&ExerciseId::Squat], 320.0, 0.001);
    }

    #[tokio::test]
    async fn test_get_strength_summary() {
        let summary = service(Some(200.0)).get_strength_summary().await.unwrap();

        assert_eq!(summary.max_weights, BTreeMap::from([(Lift::Squat, 310.0)]));
        assert_eq!(summary.body_weight, Some(200.0));
        assert_eq!(summary.data_source, DataSource::History);
    }

    #[tokio::test]
    async fn test_get_lift_assessments() {
        let assessments = service(Some(200.0)).get_lift_assessments().await.unwrap();

        assert_eq!(assessments.len(), 1);
        assert_eq!(assessments[0].lift, Lift::Squat);
        assert_eq!(assessments[0].level, Level::Intermediate);
        assert_eq!(assessments[0].ratio, "1.55");
    }

    #[tokio::test]
    async fn test_get_data_warnings() {
        assert_eq!(service(Some(200.0)).get_data_warnings().await.unwrap(), []);

        let service = Service::new(repository(Some(200.0)), RuleRegistry::new([]));
        assert_eq!(
            service.get_data_warnings().await.unwrap(),
            [Warning::MissingRule {
                exercise: ExerciseId::Squat
            }]
        );
    }

    #[tokio::test]
    async fn test_get_lift_assessments_without_body_weight() {
        assert!(matches!(
            service(None).get_lift_assessments().await,
            Err(ReadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let service = Service::new(DisconnectedRepository, RuleRegistry::builtin().clone());

        assert!(matches!(
            service.get_week_summaries().await,
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
        assert!(matches!(
            service.get_strength_summary().await,
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
    }
}
