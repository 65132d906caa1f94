//! Black-Scholes-Merton pricing for European options.
//!
//! This module provides closed-form prices and first-order Greeks for
//! European calls and puts on an underlying with continuous dividend yield q.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The functions do not validate their inputs. T <= 0 or σ <= 0 divide by
//! zero and produce non-finite results.

use crate::math::distributions::{norm_cdf, norm_pdf};
use crate::types::{OptionType, PricingError, PricingInputs};

use super::greeks::Greeks;

/// Computes the d1 term of the Black-Scholes-Merton formula.
///
/// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
///
/// # Arguments
/// * `spot` - Spot price (S)
/// * `strike` - Strike price (K)
/// * `rate` - Risk-free rate (r)
/// * `volatility` - Volatility (σ)
/// * `expiry` - Time to expiration in years (T)
/// * `dividend` - Continuous dividend yield (q)
///
/// # Examples
/// ```
/// use pricer_bsm::analytical::d1;
///
/// let d1 = d1(100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
/// assert!((d1 - 0.35).abs() < 1e-12);
/// ```
#[inline]
pub fn d1(spot: f64, strike: f64, rate: f64, volatility: f64, expiry: f64, dividend: f64) -> f64 {
    let log_moneyness = (spot / strike).ln();
    let drift = (rate - dividend + 0.5 * volatility * volatility) * expiry;
    (log_moneyness + drift) / (volatility * expiry.sqrt())
}

/// Computes the d2 term of the Black-Scholes-Merton formula.
///
/// d₂ = d₁ - σ√T
#[inline]
pub fn d2(spot: f64, strike: f64, rate: f64, volatility: f64, expiry: f64, dividend: f64) -> f64 {
    d1(spot, strike, rate, volatility, expiry, dividend) - volatility * expiry.sqrt()
}

impl PricingInputs {
    /// d₁ for these inputs. See [`d1`].
    #[inline]
    pub fn d1(&self) -> f64 {
        d1(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.expiry,
            self.dividend,
        )
    }

    /// d₂ for these inputs. See [`d2`].
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.vol_sqrt_t()
    }
}

/// Intermediate quantities shared by the price and every Greek.
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    /// e^(-rT)
    discount: f64,
    /// e^(-qT)
    carry: f64,
}

impl Terms {
    #[inline]
    fn new(inputs: &PricingInputs) -> Self {
        let sqrt_t = inputs.expiry.sqrt();
        let d1 = inputs.d1();
        Self {
            d1,
            d2: d1 - inputs.volatility * sqrt_t,
            sqrt_t,
            discount: inputs.discount_factor(),
            carry: inputs.dividend_factor(),
        }
    }
}

/// Computes the European option price.
///
/// - Call: S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
/// - Put: K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
///
/// Pure and deterministic: identical inputs give the identical result.
///
/// # Examples
/// ```
/// use pricer_bsm::analytical::price;
/// use pricer_bsm::types::{OptionType, PricingInputs};
///
/// let inputs = PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0);
/// let call = price(OptionType::Call, &inputs);
/// let put = price(OptionType::Put, &inputs);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[inline]
pub fn price(option_type: OptionType, inputs: &PricingInputs) -> f64 {
    let t = Terms::new(inputs);
    let spot = inputs.spot * t.carry;
    let strike = inputs.strike * t.discount;

    match option_type {
        OptionType::Call => spot * norm_cdf(t.d1) - strike * norm_cdf(t.d2),
        OptionType::Put => strike * norm_cdf(-t.d2) - spot * norm_cdf(-t.d1),
    }
}

/// Computes Delta, Gamma, Theta, Vega and Rho.
///
/// - Delta: call e^(-qT)·N(d₁), put e^(-qT)·(N(d₁) - 1)
/// - Gamma: e^(-qT)·φ(d₁) / (S·σ·√T), same for calls and puts
/// - Vega: S·e^(-qT)·φ(d₁)·√T, same for calls and puts
/// - Theta: -S·e^(-qT)·φ(d₁)·σ/(2√T) ∓ r·K·e^(-rT)·N(±d₂) ± q·S·e^(-qT)·N(±d₁)
/// - Rho: call K·T·e^(-rT)·N(d₂), put -K·T·e^(-rT)·N(-d₂)
///
/// Theta is per year and vega per unit volatility.
///
/// # Examples
/// ```
/// use pricer_bsm::analytical::greeks;
/// use pricer_bsm::types::{OptionType, PricingInputs};
///
/// let inputs = PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0);
/// let g = greeks(OptionType::Put, &inputs);
/// assert!(g.delta < 0.0);
/// assert!(g.gamma > 0.0 && g.vega > 0.0);
/// ```
pub fn greeks(option_type: OptionType, inputs: &PricingInputs) -> Greeks {
    let t = Terms::new(inputs);
    let PricingInputs {
        spot,
        strike,
        rate,
        volatility,
        expiry,
        dividend,
    } = *inputs;

    let pdf_d1 = norm_pdf(t.d1);
    let carried_spot = spot * t.carry;
    let discounted_strike = strike * t.discount;

    let gamma = t.carry * pdf_d1 / (spot * volatility * t.sqrt_t);
    let vega = carried_spot * pdf_d1 * t.sqrt_t;

    // Common theta term: -S·e^(-qT)·φ(d₁)·σ/(2√T)
    let decay = -carried_spot * pdf_d1 * volatility / (2.0 * t.sqrt_t);

    let (delta, theta, rho) = match option_type {
        OptionType::Call => {
            let n_d1 = norm_cdf(t.d1);
            let n_d2 = norm_cdf(t.d2);
            (
                t.carry * n_d1,
                decay - rate * discounted_strike * n_d2 + dividend * carried_spot * n_d1,
                expiry * discounted_strike * n_d2,
            )
        }
        OptionType::Put => {
            let n_minus_d1 = norm_cdf(-t.d1);
            let n_minus_d2 = norm_cdf(-t.d2);
            (
                // e^(-qT)·(N(d₁) - 1) without the cancellation
                -t.carry * n_minus_d1,
                decay + rate * discounted_strike * n_minus_d2 - dividend * carried_spot * n_minus_d1,
                -expiry * discounted_strike * n_minus_d2,
            )
        }
    };

    Greeks::new(delta, gamma, theta, vega, rho)
}

/// Prices an option whose type is given as text.
///
/// # Errors
/// `PricingError::InvalidOptionType` unless `option_type` is exactly
/// `"call"` or `"put"`. No price is computed in that case.
///
/// # Examples
/// ```
/// use pricer_bsm::analytical::price_by_name;
/// use pricer_bsm::types::PricingInputs;
///
/// let inputs = PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0);
/// assert!(price_by_name("call", &inputs).is_ok());
/// assert!(price_by_name("straddle", &inputs).is_err());
/// ```
pub fn price_by_name(option_type: &str, inputs: &PricingInputs) -> Result<f64, PricingError> {
    let option_type: OptionType = option_type.parse()?;
    Ok(price(option_type, inputs))
}

/// Greeks for an option whose type is given as text.
///
/// # Errors
/// Same contract as [`price_by_name`].
pub fn greeks_by_name(option_type: &str, inputs: &PricingInputs) -> Result<Greeks, PricingError> {
    let option_type: OptionType = option_type.parse()?;
    Ok(greeks(option_type, inputs))
}
