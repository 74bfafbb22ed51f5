//! # Engineering Calculator
//!
//! [`EngineeringCalculator`] adds roots, powers, logarithms and trigonometry on
//! top of the basic four functions. Unlike [`Calculator`], the rounding
//! precision is configured once on the instance and applied to every result.
//!
//! Inputs outside a function's real domain (square root of a negative, log of
//! a non-positive value, a power with no real result, any `NaN` input, an
//! infinite angle) are rejected with
//! [`CalcError::InvalidArgument`] instead of returning `NaN`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::angle::AngleUnit;
//! use calc_core::engineering::EngineeringCalculator;
//!
//! let calc = EngineeringCalculator::new(Some(4), false);
//! assert_eq!(calc.square_root(16.0).unwrap(), 4.0);
//! assert_eq!(calc.power(6.0, 3.0).unwrap(), 216.0);
//! assert_eq!(calc.log10(100.0).unwrap(), 2.0);
//! assert_eq!(calc.sin(30.0, AngleUnit::Degree).unwrap(), 0.5);
//! ```

use serde_json::Value;
use tracing::warn;

use crate::angle::{convert_to_radians, AngleUnit};
use crate::basic::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::rounding::round_result;
use crate::settings::CalculatorSettings;

/// Calculator with engineering functions and instance-wide precision.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineeringCalculator {
    basic: Calculator,
    precision: Option<u32>,
    return_float: bool,
}

impl EngineeringCalculator {
    /// Create a calculator rounding to `precision` digits (`None` = unrounded).
    ///
    /// `return_float` only affects [`format_result`](Self::format_result).
    pub fn new(precision: Option<u32>, return_float: bool) -> Self {
        EngineeringCalculator {
            basic: Calculator::new(),
            precision,
            return_float,
        }
    }

    /// Create a calculator configured from loaded settings.
    pub fn from_settings(settings: &CalculatorSettings) -> Self {
        Self::new(settings.precision, settings.return_float)
    }

    /// The basic calculator this one delegates arithmetic to.
    pub fn basic(&self) -> &Calculator {
        &self.basic
    }

    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    pub fn set_precision(&mut self, precision: Option<u32>) {
        self.precision = precision;
    }

    /// Set the precision from an untyped value.
    ///
    /// Accepts a non-negative integer or `null`. Anything else is rejected and
    /// the current precision is kept.
    pub fn try_set_precision(&mut self, value: &Value) -> CalcResult<()> {
        self.precision = precision_from_value(value)?;
        Ok(())
    }

    pub fn return_float(&self) -> bool {
        self.return_float
    }

    pub fn set_return_float(&mut self, return_float: bool) {
        self.return_float = return_float;
    }

    /// Set `return_float` from an untyped value. Only booleans are accepted.
    pub fn try_set_return_float(&mut self, value: &Value) -> CalcResult<()> {
        self.return_float = return_float_from_value(value)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Arithmetic, delegated with the instance precision
    // ------------------------------------------------------------------

    pub fn add(&self, nums: &[f64]) -> CalcResult<f64> {
        self.basic.add(nums, self.precision)
    }

    pub fn subtract(&self, nums: &[f64]) -> CalcResult<f64> {
        self.basic.subtract(nums, self.precision)
    }

    pub fn multiply(&self, nums: &[f64]) -> CalcResult<f64> {
        self.basic.multiply(nums, self.precision)
    }

    pub fn divide(&self, nums: &[f64]) -> CalcResult<f64> {
        self.basic.divide(nums, self.precision)
    }

    // ------------------------------------------------------------------
    // Engineering functions
    // ------------------------------------------------------------------

    /// Principal square root.
    pub fn square_root(&self, x: f64) -> CalcResult<f64> {
        require_number("x", x)?;
        if x < 0.0 {
            return Err(domain_error("x", x, "Square root of a negative number is not real"));
        }
        Ok(self.round(x.sqrt()))
    }

    /// `x` raised to `y`.
    ///
    /// # Errors
    ///
    /// [`CalcError::InvalidArgument`] when the result is not a real number
    /// (negative base with a fractional exponent) or overflows
    /// (including zero raised to a negative power), and when either input is `NaN`.
    pub fn power(&self, x: f64, y: f64) -> CalcResult<f64> {
        require_number("x", x)?;
        require_number("y", y)?;
        let result = x.powf(y);
        if result.is_nan() {
            return Err(domain_error("x", x, format!("{} raised to {} has no real value", x, y)));
        }
        if result.is_infinite() && x.is_finite() && y.is_finite() {
            return Err(domain_error("y", y, format!("{} raised to {} is not finite", x, y)));
        }
        Ok(self.round(result))
    }

    /// Logarithm of `x` in `base`.
    pub fn log(&self, x: f64, base: f64) -> CalcResult<f64> {
        require_number("x", x)?;
        require_number("base", base)?;
        if x <= 0.0 {
            return Err(domain_error("x", x, "Logarithm is only defined for positive values"));
        }
        if base <= 0.0 || base == 1.0 {
            return Err(domain_error("base", base, "Logarithm base must be positive and not 1"));
        }
        // log10/log2 are exact on powers of their base; ln(x)/ln(b) is not.
        let result = if base == 10.0 {
            x.log10()
        } else if base == 2.0 {
            x.log2()
        } else {
            x.ln() / base.ln()
        };
        Ok(self.round(result))
    }

    /// Base-10 logarithm, the default base for [`log`](Self::log).
    pub fn log10(&self, x: f64) -> CalcResult<f64> {
        self.log(x, 10.0)
    }

    /// Natural logarithm.
    pub fn ln(&self, x: f64) -> CalcResult<f64> {
        require_number("x", x)?;
        if x <= 0.0 {
            return Err(domain_error("x", x, "Logarithm is only defined for positive values"));
        }
        Ok(self.round(x.ln()))
    }

    pub fn sin(&self, angle: f64, unit: AngleUnit) -> CalcResult<f64> {
        Ok(self.round(radians(angle, unit)?.sin()))
    }

    pub fn cos(&self, angle: f64, unit: AngleUnit) -> CalcResult<f64> {
        Ok(self.round(radians(angle, unit)?.cos()))
    }

    pub fn tan(&self, angle: f64, unit: AngleUnit) -> CalcResult<f64> {
        Ok(self.round(radians(angle, unit)?.tan()))
    }

    /// Render a result for display.
    ///
    /// Integral values print without a fractional part (`4`) unless
    /// `return_float` is set, in which case they keep one (`4.0`).
    pub fn format_result(&self, value: f64) -> String {
        if self.return_float && value.is_finite() && value.fract() == 0.0 {
            format!("{:.1}", value)
        } else {
            format!("{}", value)
        }
    }

    fn round(&self, value: f64) -> f64 {
        round_result(value, self.precision)
    }
}

fn require_number(field: &str, value: f64) -> CalcResult<()> {
    if value.is_nan() {
        return Err(domain_error(field, value, "Input is not a number"));
    }
    Ok(())
}

/// Trig input in radians; `NaN` and infinite angles have no sine or cosine.
fn radians(angle: f64, unit: AngleUnit) -> CalcResult<f64> {
    if !angle.is_finite() {
        return Err(domain_error("angle", angle, "Angle must be a finite number"));
    }
    Ok(convert_to_radians(angle, unit))
}

fn domain_error(field: &str, value: f64, reason: impl Into<String>) -> CalcError {
    let err = CalcError::invalid_argument(field, value.to_string(), reason);
    warn!(%err, "math domain error");
    err
}

/// Validate an untyped precision: a non-negative integer or `null`.
pub(crate) fn precision_from_value(value: &Value) -> CalcResult<Option<u32>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .and_then(|digits| u32::try_from(digits).ok())
            .map(Some)
            .ok_or_else(|| {
                CalcError::invalid_argument(
                    "precision",
                    value.to_string(),
                    "Precision must be a non-negative integer or null",
                )
            }),
        _ => Err(CalcError::invalid_argument(
            "precision",
            value.to_string(),
            "Precision must be an integer or null",
        )),
    }
}

/// Validate an untyped return_float flag: booleans only.
pub(crate) fn return_float_from_value(value: &Value) -> CalcResult<bool> {
    value.as_bool().ok_or_else(|| {
        CalcError::invalid_argument("return_float", value.to_string(), "return_float must be a boolean")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use serde_json::json;
    use std::f64::consts::{E, PI};

    #[test]
    fn test_defaults() {
        let calc = EngineeringCalculator::default();
        assert_eq!(calc.precision(), None);
        assert!(!calc.return_float());
    }

    #[test]
    fn test_square_root() {
        let calc = EngineeringCalculator::default();
        assert_eq!(calc.square_root(16.0).unwrap(), 4.0);
        assert_eq!(calc.square_root(0.0).unwrap(), 0.0);
        assert_relative_eq!(calc.square_root(2.0).unwrap(), std::f64::consts::SQRT_2);
    }

    #[test]
    fn test_square_root_of_negative_rejected() {
        let calc = EngineeringCalculator::default();
        let err = calc.square_root(-4.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_power() {
        let calc = EngineeringCalculator::default();
        assert_eq!(calc.power(6.0, 3.0).unwrap(), 216.0);
        assert_eq!(calc.power(2.0, -1.0).unwrap(), 0.5);
        assert_eq!(calc.power(-2.0, 3.0).unwrap(), -8.0);
        assert_eq!(calc.power(0.0, 0.0).unwrap(), 1.0);
        assert_relative_eq!(calc.power(9.0, 0.5).unwrap(), 3.0);
    }

    #[test]
    fn test_power_domain_errors() {
        let calc = EngineeringCalculator::default();
        assert!(calc.power(-8.0, 1.0 / 3.0).is_err());
        assert!(calc.power(0.0, -1.0).is_err());
        assert!(calc.power(10.0, 400.0).is_err());
    }

    #[test]
    fn test_log() {
        let calc = EngineeringCalculator::default();
        assert_eq!(calc.log10(100.0).unwrap(), 2.0);
        assert_eq!(calc.log(1000.0, 10.0).unwrap(), 3.0);
        assert_eq!(calc.log(8.0, 2.0).unwrap(), 3.0);
        assert_relative_eq!(calc.log(81.0, 3.0).unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(calc.ln(E).unwrap(), 1.0);
        assert_eq!(calc.ln(1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_log_domain_errors() {
        let calc = EngineeringCalculator::default();
        assert!(calc.log10(0.0).is_err());
        assert!(calc.log10(-5.0).is_err());
        assert!(calc.log(10.0, 1.0).is_err());
        assert!(calc.log(10.0, -2.0).is_err());
        assert!(calc.ln(0.0).is_err());
    }

    #[test]
    fn test_nan_inputs_rejected() {
        let calc = EngineeringCalculator::default();
        let nan = f64::NAN;
        for result in [
            calc.square_root(nan),
            calc.power(nan, 0.0),
            calc.power(1.0, nan),
            calc.log(nan, 10.0),
            calc.log(10.0, nan),
            calc.log10(nan),
            calc.ln(nan),
            calc.sin(nan, AngleUnit::Radian),
            calc.cos(f64::INFINITY, AngleUnit::Degree),
            calc.tan(f64::NEG_INFINITY, AngleUnit::Radian),
        ] {
            assert_eq!(result.unwrap_err().error_code(), "INVALID_ARGUMENT");
        }
    }

    #[test]
    fn test_infinite_inputs_follow_ieee() {
        let calc = EngineeringCalculator::default();
        assert_eq!(calc.square_root(f64::INFINITY).unwrap(), f64::INFINITY);
        assert_eq!(calc.ln(f64::INFINITY).unwrap(), f64::INFINITY);
        assert_eq!(calc.power(f64::INFINITY, -1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_trig_units() {
        let calc = EngineeringCalculator::default();
        assert_relative_eq!(calc.sin(90.0, AngleUnit::Degree).unwrap(), 1.0, epsilon = 0.01);
        assert_relative_eq!(calc.sin(PI / 2.0, AngleUnit::Radian).unwrap(), 1.0);
        assert_relative_eq!(calc.cos(180.0, AngleUnit::Degree).unwrap(), -1.0);
        assert_abs_diff_eq!(calc.cos(PI / 2.0, AngleUnit::Radian).unwrap(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(calc.tan(45.0, AngleUnit::Degree).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_instance_precision_applies_everywhere() {
        let calc = EngineeringCalculator::new(Some(2), false);
        assert_eq!(calc.square_root(2.0).unwrap(), 1.41);
        assert_eq!(calc.ln(10.0).unwrap(), 2.3);
        assert_eq!(calc.sin(30.0, AngleUnit::Degree).unwrap(), 0.5);
        assert_eq!(calc.cos(PI / 2.0, AngleUnit::Radian).unwrap(), 0.0);
        assert_eq!(calc.divide(&[10.0, 3.0]).unwrap(), 3.33);
    }

    #[test]
    fn test_delegated_arithmetic() {
        let calc = EngineeringCalculator::default();
        assert_eq!(calc.add(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
        assert_eq!(calc.subtract(&[1.0, 2.0, 3.0]).unwrap(), -4.0);
        assert_eq!(calc.multiply(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
        assert!(calc.divide(&[1.0, 0.0]).unwrap_err().is_recoverable());
        assert_eq!(*calc.basic(), Calculator::new());
    }

    #[test]
    fn test_try_set_precision() {
        let mut calc = EngineeringCalculator::default();
        calc.try_set_precision(&json!(3)).unwrap();
        assert_eq!(calc.precision(), Some(3));

        calc.try_set_precision(&Value::Null).unwrap();
        assert_eq!(calc.precision(), None);

        calc.set_precision(Some(5));
        for bad in [json!(2.5), json!("2"), json!(true), json!(-1), json!([1])] {
            let err = calc.try_set_precision(&bad).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_ARGUMENT");
        }
        assert_eq!(calc.precision(), Some(5));
    }

    #[test]
    fn test_try_set_return_float() {
        let mut calc = EngineeringCalculator::default();
        calc.try_set_return_float(&json!(true)).unwrap();
        assert!(calc.return_float());

        for bad in [json!(1), json!("true"), Value::Null] {
            assert!(calc.try_set_return_float(&bad).is_err());
        }
        assert!(calc.return_float());
    }

    #[test]
    fn test_return_float_does_not_change_values() {
        let plain = EngineeringCalculator::new(None, false);
        let floaty = EngineeringCalculator::new(None, true);
        assert_eq!(plain.square_root(16.0).unwrap(), floaty.square_root(16.0).unwrap());
    }

    #[test]
    fn test_format_result() {
        let plain = EngineeringCalculator::new(None, false);
        assert_eq!(plain.format_result(4.0), "4");
        assert_eq!(plain.format_result(3.25), "3.25");

        let floaty = EngineeringCalculator::new(None, true);
        assert_eq!(floaty.format_result(4.0), "4.0");
        assert_eq!(floaty.format_result(3.25), "3.25");
        assert_eq!(floaty.format_result(f64::INFINITY), "inf");
    }

    #[test]
    fn test_from_settings() {
        let settings = CalculatorSettings {
            precision: Some(1),
            return_float: true,
            angle_unit: AngleUnit::Degree,
        };
        let calc = EngineeringCalculator::from_settings(&settings);
        assert_eq!(calc.precision(), Some(1));
        assert!(calc.return_float());
    }
}
