//! Value types and errors shared by the pricing engine and its callers.
//!
//! - `OptionType`: Call or put (`option`)
//! - `PricingInputs`: Spot, strike, rate, volatility, expiry, dividend yield (`inputs`)
//! - `PricingError`: Engine error taxonomy (`error`)

pub mod error;
pub mod inputs;
pub mod option;

pub use error::PricingError;
pub use inputs::PricingInputs;
pub use option::OptionType;
