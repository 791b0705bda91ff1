use crate::exercise::ExerciseId;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("no data found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("no session")]
    NoSession,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

/// Non-fatal condition encountered while interpreting logged data. Warnings
/// never abort a computation; the affected value falls back to a defined
/// default and the caller decides whether to surface them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("unparsable weight notation {token:?}")]
    UnparsableWeight {
        exercise: Option<ExerciseId>,
        token: String,
    },
    #[error("unknown exercise name {name:?}")]
    UnknownExercise { name: String },
    #[error("no rule registered for {exercise}")]
    MissingRule { exercise: ExerciseId },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_warning_display() {
        assert_eq!(
            Warning::UnparsableWeight {
                exercise: Some(ExerciseId::Squat),
                token: "heavy".to_string(),
            }
            .to_string(),
            "unparsable weight notation \"heavy\""
        );
        assert_eq!(
            Warning::UnknownExercise {
                name: "Zercher Squat".to_string()
            }
            .to_string(),
            "unknown exercise name \"Zercher Squat\""
        );
        assert_eq!(
            Warning::MissingRule {
                exercise: ExerciseId::Plank
            }
            .to_string(),
            "no rule registered for Plank"
        );
    }
}
