//! # Angle Units
//!
//! Trigonometric operations accept an angle together with an [`AngleUnit`].
//! [`convert_to_radians`] normalizes the pair before evaluation.
//!
//! Parsing a unit from text is deliberately lenient: anything that is not
//! a spelling of "degree" is read as radians.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::angle::{convert_to_radians, AngleUnit};
//!
//! let rad = convert_to_radians(180.0, AngleUnit::Degree);
//! assert!((rad - std::f64::consts::PI).abs() < 1e-12);
//!
//! assert_eq!(AngleUnit::parse_lenient("degree"), AngleUnit::Degree);
//! assert_eq!(AngleUnit::parse_lenient("gradian"), AngleUnit::Radian);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Unit an angle value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radian,
    Degree,
}

impl AngleUnit {
    /// Read a unit name, falling back to [`AngleUnit::Radian`] for anything unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "degree" | "degrees" | "deg" => AngleUnit::Degree,
            "radian" | "radians" | "rad" => AngleUnit::Radian,
            other => {
                debug!(unit = other, "unrecognized angle unit, treating as radian");
                AngleUnit::Radian
            }
        }
    }

    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            AngleUnit::Radian => "radian",
            AngleUnit::Degree => "degree",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleUnit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AngleUnit::parse_lenient(s))
    }
}

// Settings files may carry any string here; unknown names read as radian.
impl<'de> Deserialize<'de> for AngleUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(AngleUnit::parse_lenient(&name))
    }
}

/// Convert `angle`, given in `unit`, to radians.
pub fn convert_to_radians(angle: f64, unit: AngleUnit) -> f64 {
    match unit {
        AngleUnit::Degree => angle.to_radians(),
        AngleUnit::Radian => angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_degree_to_radian() {
        assert_relative_eq!(convert_to_radians(180.0, AngleUnit::Degree), PI, epsilon = 1e-12);
        assert_relative_eq!(convert_to_radians(90.0, AngleUnit::Degree), PI / 2.0, epsilon = 1e-12);
        assert_eq!(convert_to_radians(0.0, AngleUnit::Degree), 0.0);
    }

    #[test]
    fn test_radian_passthrough() {
        assert_eq!(convert_to_radians(PI, AngleUnit::Radian), PI);
        assert_eq!(convert_to_radians(-1.25, AngleUnit::default()), -1.25);
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!("degree".parse::<AngleUnit>(), Ok(AngleUnit::Degree));
        assert_eq!(AngleUnit::parse_lenient(" DEG "), AngleUnit::Degree);
        assert_eq!(AngleUnit::parse_lenient("radian"), AngleUnit::Radian);
        assert_eq!(AngleUnit::parse_lenient("turns"), AngleUnit::Radian);
        assert_eq!(AngleUnit::parse_lenient(""), AngleUnit::Radian);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&AngleUnit::Degree).unwrap();
        assert_eq!(json, "\"degree\"");

        let roundtrip: AngleUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, AngleUnit::Degree);

        let unknown: AngleUnit = serde_json::from_str("\"grad\"").unwrap();
        assert_eq!(unknown, AngleUnit::Radian);
    }
}
