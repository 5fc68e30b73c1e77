//! Angle units for the rotation operations
//!
//! Rotation angles arrive in degrees or radians; matrices are always built
//! from radians. The unit is a closed enum, so an invalid unit can only
//! occur where untyped values enter: parsing.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

/// Angle units accepted by `rotate_x`/`rotate_y`/`rotate_z`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    /// Degrees, converted to radians before matrix construction
    #[serde(rename = "deg")]
    Degrees,
    /// Radians, used as-is
    #[serde(rename = "rad")]
    Radians,
}

impl AngleUnit {
    /// Express `angle` in radians
    #[inline]
    pub fn to_radians(self, angle: f32) -> f32 {
        match self {
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Radians => angle,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "deg"),
            AngleUnit::Radians => write!(f, "rad"),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = ParseAngleUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deg" => Ok(AngleUnit::Degrees),
            "rad" => Ok(AngleUnit::Radians),
            other => Err(ParseAngleUnitError(other.to_string())),
        }
    }
}

/// Error for an unrecognized angle unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAngleUnitError(pub String);

impl fmt::Display for ParseAngleUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid option for angle units", self.0)
    }
}

impl std::error::Error for ParseAngleUnitError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_degrees_convert() {
        assert!((AngleUnit::Degrees.to_radians(90.0) - FRAC_PI_2).abs() < 1e-6);
        assert!((AngleUnit::Degrees.to_radians(180.0) - PI).abs() < 1e-6);
        assert_eq!(AngleUnit::Degrees.to_radians(0.0), 0.0);
    }

    #[test]
    fn test_radians_pass_through() {
        assert_eq!(AngleUnit::Radians.to_radians(1.25), 1.25);
        assert_eq!(AngleUnit::Radians.to_radians(-PI), -PI);
    }

    #[test]
    fn test_parse_known_units() {
        assert_eq!("deg".parse::<AngleUnit>(), Ok(AngleUnit::Degrees));
        assert_eq!("rad".parse::<AngleUnit>(), Ok(AngleUnit::Radians));
    }

    #[test]
    fn test_parse_rejects_unknown_units() {
        let err = "furlong".parse::<AngleUnit>().unwrap_err();
        assert_eq!(err, ParseAngleUnitError("furlong".to_string()));
        let msg = format!("{}", err);
        assert!(msg.contains("furlong"));
        assert!(msg.contains("not a valid option"));

        // spellings are exact, not case-insensitive
        assert!("DEG".parse::<AngleUnit>().is_err());
        assert!("degrees".parse::<AngleUnit>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for unit in [AngleUnit::Degrees, AngleUnit::Radians] {
            assert_eq!(unit.to_string().parse::<AngleUnit>(), Ok(unit));
        }
    }
}
