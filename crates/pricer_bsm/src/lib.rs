//! # pricer_bsm: Black-Scholes-Merton Pricing Engine
//!
//! ## Role
//!
//! pricer_bsm is the pricing kernel of the workspace. It evaluates the
//! closed-form Black-Scholes-Merton formulas for European options on an
//! underlying paying a continuous dividend yield:
//! - Standard normal distribution (`math::distributions`)
//! - d1/d2 terms, prices and first-order Greeks (`analytical::black_scholes`)
//! - Value types: `OptionType`, `PricingInputs` (`types`), `Greeks` (`analytical::greeks`)
//! - Error type: `PricingError` (`types::error`)
//!
//! ## Validation Boundary
//!
//! The formulas perform no defensive checks. Positivity of spot, strike,
//! volatility and expiry is the caller's policy, expressed through
//! [`PricingInputs::validate`](types::PricingInputs::validate). Degenerate
//! inputs passed straight to the engine yield non-finite values.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_bsm::analytical::{greeks, price};
//! use pricer_bsm::types::{OptionType, PricingInputs};
//!
//! let inputs = PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0);
//! inputs.validate().unwrap();
//!
//! let call = price(OptionType::Call, &inputs);
//! # assert!((call - 10.4506).abs() < 1e-3);
//!
//! let g = greeks(OptionType::Call, &inputs);
//! assert!(g.delta > 0.0 && g.delta < 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType`, `PricingInputs` and `Greeks`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod math;
pub mod types;

pub use analytical::{greeks, price, Greeks};
pub use types::{OptionType, PricingError, PricingInputs};
