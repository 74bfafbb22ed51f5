//! # calc_core - Calculation Engine
//!
//! `calc_core` provides basic arithmetic, engineering functions and
//! complex-number operations behind small, stateless calculator types.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Calculators hold configuration only, never history
//! - **Explicit Errors**: Division by zero and domain errors are `Err` values, not `NaN` or panics
//! - **JSON-First**: Settings and errors implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{AngleUnit, Calculator, ComplexCalculator, EngineeringCalculator};
//! use num_complex::Complex64;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.subtract(&[10.0, 3.0, 2.0], None).unwrap(), 5.0);
//!
//! let eng = EngineeringCalculator::new(Some(3), false);
//! assert_eq!(eng.cos(60.0, AngleUnit::Degree).unwrap(), 0.5);
//!
//! let cplx = ComplexCalculator::new();
//! let (r, _theta) = cplx.to_polar(Complex64::new(3.0, 4.0));
//! assert_eq!(r, 5.0);
//! ```
//!
//! ## Modules
//!
//! - [`basic`] - Four-function arithmetic over operand lists
//! - [`engineering`] - Roots, powers, logarithms, trigonometry
//! - [`complex`] - Complex arithmetic and polar conversion
//! - [`rounding`] - Result rounding policy
//! - [`angle`] - Angle units and conversion to radians
//! - [`settings`] - Calculator configuration loaded from JSON
//! - [`errors`] - Structured error types

pub mod angle;
pub mod basic;
pub mod complex;
pub mod engineering;
pub mod errors;
pub mod rounding;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use angle::{convert_to_radians, AngleUnit};
pub use basic::Calculator;
pub use complex::ComplexCalculator;
pub use engineering::EngineeringCalculator;
pub use errors::{CalcError, CalcResult};
pub use rounding::round_result;
pub use settings::{load_settings, CalculatorSettings};
