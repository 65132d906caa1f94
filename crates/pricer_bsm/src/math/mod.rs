//! Mathematical building blocks for the pricing formulas.
//!
//! - `distributions`: Standard normal CDF and PDF

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
