//! Output rendering for pricing results
//!
//! Unit rescaling (per-day theta, per-point vega) happens here and only
//! here; the engine always returns per-year theta and per-unit vega.

use pricer_bsm::analytical::Greeks;
use pricer_bsm::types::{OptionType, PricingInputs};
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat, ThetaConvention, VegaConvention};
use crate::Result;

/// Result of one `price` invocation, as returned by the engine.
#[derive(Debug, Clone)]
pub struct PricingReport {
    pub option_type: OptionType,
    pub inputs: PricingInputs,
    pub price: f64,
    pub greeks: Option<Greeks>,
}

/// Display settings taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub precision: usize,
    pub theta_convention: ThetaConvention,
    pub vega_convention: VegaConvention,
    pub days_per_year: f64,
}

impl From<&CliConfig> for Presentation {
    fn from(config: &CliConfig) -> Self {
        Self {
            precision: config.precision,
            theta_convention: config.theta_convention,
            vega_convention: config.vega_convention,
            days_per_year: config.days_per_year,
        }
    }
}

impl Presentation {
    /// Rescales theta and vega to the configured display units.
    pub fn rescale(&self, greeks: &Greeks) -> Greeks {
        let theta = match self.theta_convention {
            ThetaConvention::PerYear => greeks.theta,
            ThetaConvention::PerDay => greeks.theta / self.days_per_year,
        };
        let vega = match self.vega_convention {
            VegaConvention::PerUnit => greeks.vega,
            VegaConvention::PerPoint => greeks.vega / 100.0,
        };
        Greeks {
            theta,
            vega,
            ..*greeks
        }
    }

    /// Display label for a Greek, e.g. `Delta` or `Theta (per day)`.
    pub fn label(&self, name: &str) -> String {
        let mut label = capitalise(name);
        match name {
            "theta" if self.theta_convention == ThetaConvention::PerDay => {
                label.push_str(" (per day)")
            }
            "vega" if self.vega_convention == VegaConvention::PerPoint => {
                label.push_str(" (per 1%)")
            }
            _ => {}
        }
        label
    }

    fn number(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    /// Label/value rows: the price, then each Greek when present.
    fn rows(&self, report: &PricingReport) -> Vec<(String, String)> {
        let mut rows = vec![("Price".to_string(), self.number(report.price))];
        if let Some(greeks) = &report.greeks {
            let shown = self.rescale(greeks);
            rows.extend(
                shown
                    .entries()
                    .iter()
                    .map(|(name, value)| (self.label(name), self.number(*value))),
            );
        }
        rows
    }
}

fn capitalise(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    option_type: OptionType,
    inputs: &'a PricingInputs,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    greeks: Option<Greeks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    theta_convention: Option<ThetaConvention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vega_convention: Option<VegaConvention>,
}

/// Render a report in the requested format (no trailing newline).
pub fn render(
    report: &PricingReport,
    format: OutputFormat,
    presentation: &Presentation,
) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(report, presentation)),
        OutputFormat::Table => Ok(render_table(report, presentation)),
        OutputFormat::Json => render_json(report, presentation),
    }
}

fn render_plain(report: &PricingReport, presentation: &Presentation) -> String {
    presentation
        .rows(report)
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(report: &PricingReport, presentation: &Presentation) -> String {
    let rows = presentation.rows(report);
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once("Metric".len()))
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.len())
        .chain(std::iter::once("Value".len()))
        .max()
        .unwrap_or(0);

    let rule = |left: &str, middle: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(label_width + 2),
            middle,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut lines = vec![
        rule("┌", "┬", "┐"),
        format!(
            "│ {:<lw$} │ {:<vw$} │",
            "Metric",
            "Value",
            lw = label_width,
            vw = value_width
        ),
        rule("├", "┼", "┤"),
    ];
    for (label, value) in &rows {
        lines.push(format!(
            "│ {:<lw$} │ {:>vw$} │",
            label,
            value,
            lw = label_width,
            vw = value_width
        ));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

fn render_json(report: &PricingReport, presentation: &Presentation) -> Result<String> {
    let greeks = report.greeks.as_ref().map(|g| presentation.rescale(g));
    let with_greeks = greeks.is_some();
    let json = JsonReport {
        option_type: report.option_type,
        inputs: &report.inputs,
        price: report.price,
        greeks,
        theta_convention: with_greeks.then_some(presentation.theta_convention),
        vega_convention: with_greeks.then_some(presentation.vega_convention),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
