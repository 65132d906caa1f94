//! Scalar inputs of the Black-Scholes-Merton formulas.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Market and contract parameters for a single European option valuation.
///
/// Fields are public plain scalars. Construction does not check anything;
/// callers that accept user input run [`PricingInputs::validate`] before
/// handing the value to the engine.
///
/// # Examples
/// ```
/// use pricer_bsm::types::PricingInputs;
///
/// let inputs = PricingInputs::new(100.0, 95.0, 0.03, 0.25, 0.5).with_dividend(0.01);
/// assert!(inputs.validate().is_ok());
///
/// let bad = PricingInputs::new(100.0, 95.0, 0.03, 0.0, 0.5);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingInputs {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Continuous dividend yield (q)
    pub dividend: f64,
}

impl PricingInputs {
    /// Creates inputs with a zero dividend yield.
    pub fn new(spot: f64, strike: f64, rate: f64, volatility: f64, expiry: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            expiry,
            dividend: 0.0,
        }
    }

    /// Returns a copy with the given dividend yield.
    pub fn with_dividend(self, dividend: f64) -> Self {
        Self { dividend, ..self }
    }

    /// Checks the domain the closed-form formulas are defined on.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` for the first violation found.
    /// Spot, strike, volatility and expiry must be strictly positive and
    /// finite (NaN fails). Rate and dividend must be finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        let positive = [
            ("spot price", self.spot),
            ("strike price", self.strike),
            ("volatility", self.volatility),
            ("time to expiry", self.expiry),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(PricingError::not_positive(name, value));
            }
            if value.is_infinite() {
                return Err(PricingError::not_finite(name, value));
            }
        }

        if !self.rate.is_finite() {
            return Err(PricingError::not_finite("risk-free rate", self.rate));
        }
        if !self.dividend.is_finite() {
            return Err(PricingError::not_finite("dividend yield", self.dividend));
        }

        Ok(())
    }

    /// σ√T
    #[inline]
    pub fn vol_sqrt_t(&self) -> f64 {
        self.volatility * self.expiry.sqrt()
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Dividend discount factor e^(-qT).
    #[inline]
    pub fn dividend_factor(&self) -> f64 {
        (-self.dividend * self.expiry).exp()
    }

    /// Forward price S·e^((r - q)T).
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * ((self.rate - self.dividend) * self.expiry).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm() -> PricingInputs {
        PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0)
    }

    #[test]
    fn test_new_defaults_zero_dividend() {
        let inputs = atm();
        assert_eq!(inputs.dividend, 0.0);
        assert_eq!(inputs.with_dividend(0.02).dividend, 0.02);
        assert_eq!(inputs.with_dividend(0.02).spot, 100.0);
    }

    #[test]
    fn test_validate_accepts_valid_inputs() {
        assert!(atm().validate().is_ok());
        // Negative rates and dividends are admissible
        assert!(atm().with_dividend(-0.01).validate().is_ok());
        let mut inputs = atm();
        inputs.rate = -0.005;
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let cases: [(fn(&mut PricingInputs), &str); 4] = [
            (|i| i.spot = 0.0, "spot price"),
            (|i| i.strike = -5.0, "strike price"),
            (|i| i.volatility = 0.0, "volatility"),
            (|i| i.expiry = -1.0, "time to expiry"),
        ];
        for (mutate, expected) in cases {
            let mut inputs = atm();
            mutate(&mut inputs);
            match inputs.validate() {
                Err(PricingError::InvalidParameter {
                    parameter,
                    requirement,
                    ..
                }) => {
                    assert_eq!(parameter, expected);
                    assert_eq!(requirement, "positive");
                }
                other => panic!("Expected InvalidParameter for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_nan_and_infinity() {
        let mut inputs = atm();
        inputs.volatility = f64::NAN;
        assert!(inputs.validate().is_err());

        let mut inputs = atm();
        inputs.expiry = f64::INFINITY;
        assert!(inputs.validate().is_err());

        let mut inputs = atm();
        inputs.rate = f64::NAN;
        assert_eq!(
            inputs.validate().unwrap_err().to_string(),
            "Invalid risk-free rate: NaN (must be finite)"
        );

        assert!(atm().with_dividend(f64::NEG_INFINITY).validate().is_err());
    }

    #[test]
    fn test_factors() {
        let inputs = PricingInputs::new(100.0, 100.0, 0.05, 0.2, 4.0).with_dividend(0.02);
        assert_relative_eq!(inputs.vol_sqrt_t(), 0.4, epsilon = 1e-15);
        assert_relative_eq!(inputs.discount_factor(), (-0.2_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(inputs.dividend_factor(), (-0.08_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(inputs.forward(), 100.0 * (0.12_f64).exp(), epsilon = 1e-12);
    }
}
