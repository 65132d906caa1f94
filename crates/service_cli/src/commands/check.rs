//! Check command implementation
//!
//! Verifies the effective configuration and runs the engine against a
//! textbook contract.

use std::path::Path;

use pricer_bsm::analytical::{greeks, price};
use pricer_bsm::types::{OptionType, PricingInputs};
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Call value for S = K = 100, r = 5%, σ = 20%, T = 1
const REFERENCE_CALL: f64 = 10.4506;

/// Run the check command
pub fn run(config: &CliConfig, source: Option<&Path>) -> Result<()> {
    for line in evaluate(config, source)? {
        println!("{}", line);
    }
    Ok(())
}

/// Perform every check; returns the report lines or the first failure.
pub fn evaluate(config: &CliConfig, source: Option<&Path>) -> Result<Vec<String>> {
    info!("Checking configuration...");
    info!(?config, "Effective configuration");
    config.validate()?;

    let origin = source
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let mut lines = vec![format!("Configuration: OK ({})", origin)];

    let inputs = PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0);
    let call = price(OptionType::Call, &inputs);
    let put = price(OptionType::Put, &inputs);
    info!(call, put, "Priced reference contract");

    if (call - REFERENCE_CALL).abs() > 1e-3 {
        return Err(CliError::CheckFailed(format!(
            "reference call priced at {:.6}, expected {}",
            call, REFERENCE_CALL
        )));
    }
    lines.push(format!(
        "Reference price: OK (call {:.6}, put {:.6})",
        call, put
    ));

    let residual = call - put - (inputs.spot - inputs.strike * inputs.discount_factor());
    if residual.abs() > 1e-9 * (inputs.spot + inputs.strike) {
        return Err(CliError::CheckFailed(format!(
            "put-call parity residual {:e}",
            residual
        )));
    }
    lines.push(format!("Put-call parity: OK (residual {:.1e})", residual));

    for option_type in [OptionType::Call, OptionType::Put] {
        let g = greeks(option_type, &inputs);
        if !g.is_finite() {
            return Err(CliError::CheckFailed(format!(
                "non-finite {} greeks: {:?}",
                option_type, g
            )));
        }
    }
    lines.push("Greeks: OK".to_string());

    info!("Check complete");
    Ok(lines)
}
