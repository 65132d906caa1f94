//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors raised at the pricing engine boundary

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidOptionType`: Option type text other than `call` or `put`
/// - `InvalidParameter`: A pricing input violating its domain, reported by
///   [`PricingInputs::validate`](crate::types::PricingInputs::validate)
///
/// Numerically degenerate inputs handed straight to the formulas are not
/// reported here; they surface as NaN or infinity.
///
/// # Examples
/// ```
/// use pricer_bsm::types::PricingError;
///
/// let err = PricingError::InvalidOptionType("straddle".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid option type: 'straddle' (expected 'call' or 'put')"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Unrecognised option type.
    #[error("Invalid option type: '{0}' (expected 'call' or 'put')")]
    InvalidOptionType(String),

    /// Pricing input outside its admissible domain.
    #[error("Invalid {parameter}: {value} (must be {requirement})")]
    InvalidParameter {
        /// Human-readable parameter name, e.g. "spot price"
        parameter: &'static str,
        /// The rejected value
        value: f64,
        /// Constraint the value failed, e.g. "positive"
        requirement: &'static str,
    },
}

impl PricingError {
    /// Shorthand for a value that must be strictly positive.
    pub fn not_positive(parameter: &'static str, value: f64) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            requirement: "positive",
        }
    }

    /// Shorthand for a value that must be a finite real number.
    pub fn not_finite(parameter: &'static str, value: f64) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            requirement: "finite",
        }
    }
}
