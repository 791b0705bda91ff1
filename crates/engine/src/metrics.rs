use std::fmt;

use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..2000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 1999.9 lbs")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1 lbs")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Set duration in seconds. Carries and planks run long, hence the wide range.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..6000).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Time {
    type Error = TimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Time::new(parsed_value),
            Err(_) => Err(TimeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 5999 s")]
    OutOfRange,
    #[error("Time must be an integer")]
    ParseError,
}

/// Rate of Perceived Exertion, stored in tenths (1.0 to 10.0 in steps of 0.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rpe(u8);

impl Rpe {
    pub const ONE: Rpe = Rpe(10);
    pub const TWO: Rpe = Rpe(20);
    pub const THREE: Rpe = Rpe(30);
    pub const FOUR: Rpe = Rpe(40);
    pub const FIVE: Rpe = Rpe(50);
    pub const SIX: Rpe = Rpe(60);
    pub const SEVEN: Rpe = Rpe(70);
    pub const EIGHT: Rpe = Rpe(80);
    pub const NINE: Rpe = Rpe(90);
    pub const TEN: Rpe = Rpe(100);

    pub fn new(value: f32) -> Result<Self, RpeError> {
        if !(1.0..=10.0).contains(&value) {
            return Err(RpeError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0) as u8;

        if v % 5 != 0 {
            return Err(RpeError::InvalidResolution);
        }

        Ok(Self(v))
    }

    #[must_use]
    pub fn avg(values: &[Rpe]) -> Option<f32> {
        if values.is_empty() {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            Some(
                values.iter().map(|rpe| f32::from(rpe.0)).sum::<f32>()
                    / values.len() as f32
                    / 10.0,
            )
        }
    }
}

impl From<Rpe> for f32 {
    fn from(value: Rpe) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for Rpe {
    type Error = RpeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Rpe::new(parsed_value),
            Err(_) => Err(RpeError::ParseError),
        }
    }
}

impl fmt::Display for Rpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RpeError {
    #[error("RPE must be in the range 1.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
}

/// Body weight in pounds. Strictly positive, so ratio computations in the
/// strength standards never divide by zero.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct BodyWeight(f32);

impl BodyWeight {
    pub fn new(value: f32) -> Result<Self, BodyWeightError> {
        if value > 0.0 && value < 1000.0 {
            Ok(Self(value))
        } else {
            Err(BodyWeightError::OutOfRange)
        }
    }
}

impl TryFrom<&str> for BodyWeight {
    type Error = BodyWeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => BodyWeight::new(parsed_value),
            Err(_) => Err(BodyWeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BodyWeightError {
    #[error("Body weight must be greater than 0 and less than 1000 lbs")]
    OutOfRange,
    #[error("Body weight must be a decimal")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(1999.9, Ok(Weight(1999.9)))]
    #[case(2000.0, Err(WeightError::OutOfRange))]
    #[case(-0.1, Err(WeightError::OutOfRange))]
    #[case(45.13, Err(WeightError::InvalidResolution))]
    fn test_weight_new(#[case] input: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(input), expected);
    }

    #[rstest]
    #[case("45.5", Ok(Weight(45.5)))]
    #[case("185", Ok(Weight(185.0)))]
    #[case("2000", Err(WeightError::OutOfRange))]
    #[case("", Err(WeightError::ParseError))]
    fn test_weight_from_str(#[case] input: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(input), expected);
    }

    #[rstest]
    #[case(Weight(45.0), "45")]
    #[case(Weight(47.5), "47.5")]
    fn test_weight_display(#[case] input: Weight, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }

    #[rstest]
    #[case(0, Ok(Reps(0)))]
    #[case(999, Ok(Reps(999)))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] input: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(input), expected);
    }

    #[rstest]
    #[case("12", Ok(Reps(12)))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("8.5", Err(RepsError::ParseError))]
    #[case("", Err(RepsError::ParseError))]
    fn test_reps_from_str(#[case] input: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(input), expected);
    }

    #[rstest]
    #[case(0, Ok(Time(0)))]
    #[case(5999, Ok(Time(5999)))]
    #[case(6000, Err(TimeError::OutOfRange))]
    fn test_time_new(#[case] input: u32, #[case] expected: Result<Time, TimeError>) {
        assert_eq!(Time::new(input), expected);
    }

    #[rstest]
    #[case("90", Ok(Time(90)))]
    #[case("6000", Err(TimeError::OutOfRange))]
    #[case("1.5", Err(TimeError::ParseError))]
    fn test_time_from_str(#[case] input: &str, #[case] expected: Result<Time, TimeError>) {
        assert_eq!(Time::try_from(input), expected);
    }

    #[rstest]
    #[case(1.0, Ok(Rpe::ONE))]
    #[case(8.0, Ok(Rpe::EIGHT))]
    #[case(9.5, Ok(Rpe(95)))]
    #[case(10.0, Ok(Rpe::TEN))]
    #[case(0.5, Err(RpeError::OutOfRange))]
    #[case(10.5, Err(RpeError::OutOfRange))]
    #[case(7.2, Err(RpeError::InvalidResolution))]
    fn test_rpe_new(#[case] input: f32, #[case] expected: Result<Rpe, RpeError>) {
        assert_eq!(Rpe::new(input), expected);
    }

    #[rstest]
    #[case("8", Ok(Rpe::EIGHT))]
    #[case("9.5", Ok(Rpe(95)))]
    #[case("11", Err(RpeError::OutOfRange))]
    #[case("", Err(RpeError::ParseError))]
    fn test_rpe_from_str(#[case] input: &str, #[case] expected: Result<Rpe, RpeError>) {
        assert_eq!(Rpe::try_from(input), expected);
    }

    #[rstest]
    #[case(Rpe::EIGHT, "8")]
    #[case(Rpe(95), "9.5")]
    fn test_rpe_display(#[case] input: Rpe, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }

    #[test]
    fn test_rpe_avg() {
        assert_eq!(Rpe::avg(&[]), None);
        assert_approx_eq!(Rpe::avg(&[Rpe::EIGHT, Rpe(95)]).unwrap(), 8.75, 0.001);
    }

    #[rstest]
    #[case(185.0, Ok(BodyWeight(185.0)))]
    #[case(0.0, Err(BodyWeightError::OutOfRange))]
    #[case(-80.0, Err(BodyWeightError::OutOfRange))]
    #[case(1000.0, Err(BodyWeightError::OutOfRange))]
    fn test_body_weight_new(
        #[case] input: f32,
        #[case] expected: Result<BodyWeight, BodyWeightError>,
    ) {
        assert_eq!(BodyWeight::new(input), expected);
    }

    #[rstest]
    #[case("172.5", Ok(BodyWeight(172.5)))]
    #[case("0", Err(BodyWeightError::OutOfRange))]
    #[case("abc", Err(BodyWeightError::ParseError))]
    fn test_body_weight_from_str(
        #[case] input: &str,
        #[case] expected: Result<BodyWeight, BodyWeightError>,
    ) {
        assert_eq!(BodyWeight::try_from(input), expected);
    }
}
