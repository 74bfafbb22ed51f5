//! # Complex Calculator
//!
//! Arithmetic and polar conversion for [`Complex64`] values. Results are
//! never rounded.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::complex::ComplexCalculator;
//! use num_complex::Complex64;
//!
//! let calc = ComplexCalculator::new();
//! let sum = calc.add(Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0));
//! assert_eq!(sum, Complex64::new(4.0, 6.0));
//! assert_eq!(calc.magnitude(Complex64::new(3.0, 4.0)), 5.0);
//! ```

use num_complex::Complex64;
use tracing::warn;

use crate::errors::{CalcError, CalcResult};

/// Stateless calculator over complex numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexCalculator;

impl ComplexCalculator {
    pub fn new() -> Self {
        ComplexCalculator
    }

    pub fn add(&self, a: Complex64, b: Complex64) -> Complex64 {
        a + b
    }

    pub fn subtract(&self, a: Complex64, b: Complex64) -> Complex64 {
        a - b
    }

    pub fn multiply(&self, a: Complex64, b: Complex64) -> Complex64 {
        a * b
    }

    /// `a / b`, or [`CalcError::DivisionByZero`] when `b` is `0 + 0i`.
    pub fn divide(&self, a: Complex64, b: Complex64) -> CalcResult<Complex64> {
        if b.re == 0.0 && b.im == 0.0 {
            warn!(dividend = %a, "complex division by zero");
            return Err(CalcError::division_by_zero("complex divide", 1));
        }
        Ok(a / b)
    }

    /// Euclidean norm `sqrt(re² + im²)`.
    pub fn magnitude(&self, a: Complex64) -> f64 {
        a.norm()
    }

    /// Phase angle in radians, in `(-π, π]`.
    pub fn argument(&self, a: Complex64) -> f64 {
        a.arg()
    }

    /// `(magnitude, argument)`
    pub fn to_polar(&self, a: Complex64) -> (f64, f64) {
        a.to_polar()
    }

    /// Complex value with modulus `r` at angle `theta` (radians).
    pub fn to_rectangular(&self, r: f64, theta: f64) -> Complex64 {
        Complex64::from_polar(r, theta)
    }
}
