//! Price command implementation
//!
//! Validates the contract, prices it with the pricer_bsm engine and prints
//! the result. Greeks are computed only on request.

use clap::Args;
use pricer_bsm::analytical::{greeks, price};
use pricer_bsm::types::{OptionType, PricingInputs};
use tracing::{debug, info, warn};

use crate::config::{CliConfig, OutputFormat, MAX_PRECISION};
use crate::output::{render, Presentation, PricingReport};
use crate::{CliError, Result};

/// Arguments of the `price` command
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    /// Option type (call or put)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub option_type: String,

    /// Spot price of the underlying (S)
    #[arg(long, visible_alias = "S", allow_hyphen_values = true)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(long, visible_alias = "K", allow_hyphen_values = true)]
    pub strike: f64,

    /// Risk-free rate, annual, as decimal e.g. 0.05 (r)
    #[arg(long, visible_alias = "r", allow_hyphen_values = true)]
    pub rate: f64,

    /// Volatility, annual, as decimal e.g. 0.2
    #[arg(long = "sigma", visible_alias = "vol", allow_hyphen_values = true)]
    pub volatility: f64,

    /// Time to maturity in years e.g. 0.5 (T)
    #[arg(long, visible_alias = "T", allow_hyphen_values = true)]
    pub expiry: f64,

    /// Dividend yield, annual, as decimal (q) [default: from config, else 0]
    #[arg(long, visible_alias = "q", allow_hyphen_values = true)]
    pub dividend: Option<f64>,

    /// Also print Greeks
    #[arg(short = 'g', long)]
    pub show_greeks: bool,

    /// Output format [default: from config, else plain]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimals to print [default: from config, else 6]
    #[arg(short, long)]
    pub precision: Option<usize>,
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let text = evaluate(args, config)?;
    println!("{}", text);
    Ok(())
}

/// Validate, price and render; returns the text `run` prints.
pub fn evaluate(args: &PriceArgs, config: &CliConfig) -> Result<String> {
    let option_type: OptionType = args.option_type.parse()?;

    let inputs = PricingInputs::new(
        args.spot,
        args.strike,
        args.rate,
        args.volatility,
        args.expiry,
    )
    .with_dividend(args.dividend.unwrap_or(config.default_dividend));

    inputs.validate()?;
    if inputs.dividend < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "dividend yield must be non-negative, got {}",
            inputs.dividend
        )));
    }

    let precision = args.precision.unwrap_or(config.precision);
    if precision > MAX_PRECISION {
        return Err(CliError::InvalidArgument(format!(
            "precision {} exceeds {}",
            precision, MAX_PRECISION
        )));
    }
    let format = args.format.unwrap_or(config.format);

    info!(
        option_type = %option_type,
        spot = inputs.spot,
        strike = inputs.strike,
        rate = inputs.rate,
        volatility = inputs.volatility,
        expiry = inputs.expiry,
        dividend = inputs.dividend,
        "Pricing European option"
    );

    let report = PricingReport {
        option_type,
        inputs,
        price: price(option_type, &inputs),
        greeks: args.show_greeks.then(|| greeks(option_type, &inputs)),
    };
    debug!(price = report.price, greeks = ?report.greeks, "Pricing complete");

    if !report.price.is_finite() || report.greeks.is_some_and(|g| !g.is_finite()) {
        warn!("Inputs overflow double precision; output contains non-finite values");
    }

    let presentation = Presentation {
        precision,
        ..Presentation::from(config)
    };
    render(&report, format, &presentation)
}
