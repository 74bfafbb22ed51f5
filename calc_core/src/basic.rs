//! # Basic Arithmetic
//!
//! [`Calculator`] folds an ordered list of operands left to right and rounds
//! the result with a per-call precision.
//!
//! - `add` / `multiply` - sum and product of all operands
//! - `subtract` / `divide` - the first operand, reduced by each following one in order
//!
//! Every operation needs at least one operand. Division by a zero operand is
//! returned as [`CalcError::DivisionByZero`] rather than producing `inf`/`NaN`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::basic::Calculator;
//! use calc_core::errors::CalcError;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(&[1.0, 2.0, 3.0], None).unwrap(), 6.0);
//! assert_eq!(calc.divide(&[100.0, 2.0, 5.0], Some(3)).unwrap(), 10.0);
//!
//! let err = calc.divide(&[1.0, 0.0], None).unwrap_err();
//! assert!(matches!(err, CalcError::DivisionByZero { .. }));
//! ```

use tracing::warn;

use crate::errors::{CalcError, CalcResult};
use crate::rounding::round_result;

/// Stateless four-function calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Calculator
    }

    /// Sum of all operands.
    pub fn add(&self, nums: &[f64], precision: Option<u32>) -> CalcResult<f64> {
        let (first, rest) = split_operands("add", nums)?;
        let result = rest.iter().fold(first, |acc, n| acc + n);
        Ok(round_result(result, precision))
    }

    /// First operand minus each following operand, in order.
    pub fn subtract(&self, nums: &[f64], precision: Option<u32>) -> CalcResult<f64> {
        let (first, rest) = split_operands("subtract", nums)?;
        let result = rest.iter().fold(first, |acc, n| acc - n);
        Ok(round_result(result, precision))
    }

    /// Product of all operands, left to right.
    pub fn multiply(&self, nums: &[f64], precision: Option<u32>) -> CalcResult<f64> {
        let (first, rest) = split_operands("multiply", nums)?;
        let result = rest.iter().fold(first, |acc, n| acc * n);
        Ok(round_result(result, precision))
    }

    /// First operand divided by each following operand, in order.
    ///
    /// # Errors
    ///
    /// * [`CalcError::DivisionByZero`] - some divisor is `0.0` or `-0.0`;
    ///   `operand_index` is its position in `nums`
    /// * [`CalcError::InvalidArgument`] - `nums` is empty
    pub fn divide(&self, nums: &[f64], precision: Option<u32>) -> CalcResult<f64> {
        let (first, rest) = split_operands("divide", nums)?;

        let mut result = first;
        for (offset, &divisor) in rest.iter().enumerate() {
            if divisor == 0.0 {
                let operand_index = offset + 1;
                warn!(operand_index, "division by zero");
                return Err(CalcError::division_by_zero("divide", operand_index));
            }
            result /= divisor;
        }
        Ok(round_result(result, precision))
    }
}

fn split_operands<'a>(operation: &str, nums: &'a [f64]) -> CalcResult<(f64, &'a [f64])> {
    match nums.split_first() {
        Some((&first, rest)) => Ok((first, rest)),
        None => Err(CalcError::invalid_argument(
            "nums",
            "[]",
            format!("{} requires at least one operand", operation),
        )),
    }
}
