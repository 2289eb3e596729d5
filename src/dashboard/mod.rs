//! Host-UI glue for the pricing dashboard.
//!
//! The dashboard frontend holds slider state and calls into this module on
//! every input change: convert the raw slider snapshot into contract
//! parameters, price it, format the scalar panel, and build the heatmap
//! grids. Everything here is a pure function of its arguments; no state
//! lives on this side of the boundary.

pub mod config;

pub use config::{DashboardConfig, GridAxis, SliderRange};

use crate::models::bs::{Greeks, OptionType};
use crate::surface::linspace;

/// Raw slider snapshot as the UI holds it: volatility and rate in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInputs {
    pub spot: f64,
    pub strike: f64,
    /// Volatility in percent (20 means σ = 0.20).
    pub vol_pct: f64,
    /// Time to maturity in years.
    pub maturity_years: f64,
    /// Risk-free rate in percent (2 means r = 0.02).
    pub rate_pct: f64,
    pub option_type: OptionType,
}

impl MarketInputs {
    /// Initial slider positions for a given dashboard layout.
    pub fn defaults(config: &DashboardConfig) -> Self {
        Self {
            spot: config.spot.default,
            strike: config.strike.default,
            vol_pct: config.vol_pct.default,
            maturity_years: config.maturity.default,
            rate_pct: config.rate_pct.default,
            option_type: OptionType::Call,
        }
    }

    /// Convert the percent-scaled slider values into pricer inputs.
    pub fn to_contract(&self) -> ContractParams {
        ContractParams {
            s: self.spot,
            k: self.strike,
            t: self.maturity_years,
            r: self.rate_pct / 100.0,
            sigma: self.vol_pct / 100.0,
            option_type: self.option_type,
        }
    }
}

/// Decimal-scaled contract parameters, ready for the pricer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractParams {
    pub s: f64,
    pub k: f64,
    pub t: f64,
    pub r: f64,
    pub sigma: f64,
    pub option_type: OptionType,
}

impl ContractParams {
    pub fn price(&self) -> f64 {
        crate::models::bs::price(self.s, self.k, self.t, self.r, self.sigma, self.option_type)
    }

    pub fn greeks(&self) -> Greeks {
        crate::models::bs::greeks(self.s, self.k, self.t, self.r, self.sigma, self.option_type)
    }
}

/// Render a price for the dashboard's price box: two decimals, thousands
/// separators, leading `$`.
pub fn format_price(price: f64) -> String {
    let rounded = format!("{:.2}", price.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::new();
    let digits = int_part.as_bytes();
    for (i, &b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(b as char);
    }

    let sign = if price < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}

/// Render the five Greek boxes, in dashboard order, with the dashboard's
/// per-Greek precision (gamma at six decimals, the rest at four).
pub fn format_greeks(greeks: &Greeks) -> [String; 5] {
    [
        format!("Δ Delta: {:.4}", greeks.delta),
        format!("Γ Gamma: {:.6}", greeks.gamma),
        format!("V Vega:  {:.4}", greeks.vega),
        format!("Θ Theta: {:.4}", greeks.theta),
        format!("ρ Rho:   {:.4}", greeks.rho),
    ]
}

/// Build the (spot, volatility) axes for the heatmap from the configured
/// grid layout.
pub fn heatmap_grids(config: &DashboardConfig) -> (Vec<f64>, Vec<f64>) {
    let spots = linspace(
        config.heatmap_spot.start,
        config.heatmap_spot.stop,
        config.heatmap_spot.points,
    );
    let vols = linspace(
        config.heatmap_vol.start,
        config.heatmap_vol.stop,
        config.heatmap_vol.points,
    );
    (spots, vols)
}
