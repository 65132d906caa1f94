//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form Black-Scholes-Merton results:
//! - d1/d2 terms
//! - Call and put prices with continuous dividend yield
//! - First-order Greeks (Delta, Gamma, Theta, Vega, Rho)
//!
//! ## Conventions
//!
//! - Theta is the raw per-year sensitivity (time decay, usually negative)
//! - Vega is per unit of volatility, not per percentage point
//!
//! Rescaling to per-day or per-point figures is a presentation concern.

pub mod black_scholes;
pub mod greeks;

pub use black_scholes::{d1, d2, greeks, greeks_by_name, price, price_by_name};
pub use greeks::Greeks;
