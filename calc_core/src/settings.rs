//! # Calculator Settings
//!
//! [`CalculatorSettings`] is the configuration shared by the
//! engineering calculator and the CLI: rounding precision, the
//! `return_float` display flag, and the default angle unit for trig.
//!
//! Settings are read from a human-readable JSON file; the library never
//! writes one.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::settings::load_settings;
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("calc.json")).unwrap();
//! println!("rounding to {:?} digits", settings.precision);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::angle::AngleUnit;
use crate::engineering::{precision_from_value, return_float_from_value};
use crate::errors::{CalcError, CalcResult};

/// Calculator configuration.
///
/// ## JSON Example
///
/// ```json
/// {
///   "precision": 4,
///   "return_float": false,
///   "angle_unit": "degree"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Decimal digits kept in results (`null` = unrounded)
    pub precision: Option<u32>,

    /// Print integral results with a fractional part
    pub return_float: bool,

    /// Unit assumed for trig input when none is given
    pub angle_unit: AngleUnit,
}

impl CalculatorSettings {
    /// Build settings from an untyped JSON object, validating each field.
    ///
    /// Missing fields take their defaults. A `precision` that is not a
    /// non-negative integer or `null`, or a `return_float` that is not a
    /// boolean, is an [`CalcError::InvalidArgument`].
    pub fn from_json_value(value: &Value) -> CalcResult<Self> {
        let Some(obj) = value.as_object() else {
            return Err(CalcError::invalid_argument(
                "settings",
                value.to_string(),
                "Settings must be a JSON object",
            ));
        };

        let mut settings = CalculatorSettings::default();
        if let Some(precision) = obj.get("precision") {
            settings.precision = precision_from_value(precision)?;
        }
        if let Some(return_float) = obj.get("return_float") {
            settings.return_float = return_float_from_value(return_float)?;
        }
        if let Some(unit) = obj.get("angle_unit") {
            let name = unit.as_str().ok_or_else(|| {
                CalcError::invalid_argument("angle_unit", unit.to_string(), "Angle unit must be a string")
            })?;
            settings.angle_unit = AngleUnit::parse_lenient(name);
        }
        Ok(settings)
    }
}

/// Load and validate settings from a JSON file.
pub fn load_settings(path: &Path) -> CalcResult<CalculatorSettings> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    let settings = CalculatorSettings::from_json_value(&value)?;
    info!(path = %path.display(), ?settings, "loaded calculator settings");
    Ok(settings)
}
