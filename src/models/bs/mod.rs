//! Closed-form Black-Scholes pricing and Greeks for European options.
//!
//! All functions here are pure and total over `f64`: no input validation is
//! performed, and non-positive spot, strike, maturity or volatility propagate
//! whatever IEEE-754 arithmetic produces (NaN or infinity). Range enforcement
//! is the responsibility of the host layer (see [`crate::dashboard`]), which
//! constrains every input before it reaches these functions.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// European option variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl FromStr for OptionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(anyhow!("Invalid option type: {}", s)),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Standard normal cumulative distribution function
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal probability density function
pub fn norm_pdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.pdf(x)
}

/// Black-Scholes d1 intermediate: (ln(S/K) + (r + σ²/2)T) / (σ√T)
///
/// Shared by [`price`] and [`greeks`] so both take the same rounding path.
#[allow(non_snake_case)]
pub fn d1(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / (sigma * T.sqrt())
}

/// Black-Scholes d2 intermediate: d1 − σ√T
#[allow(non_snake_case)]
pub fn d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    d1(S, K, T, r, sigma) - sigma * T.sqrt()
}

/// Price of a European option under Black-Scholes assumptions.
///
/// Call: `S·Φ(d1) − K·e^(−rT)·Φ(d2)`; put: `K·e^(−rT)·Φ(−d2) − S·Φ(−d1)`.
///
/// Returns NaN when the inputs fall outside the Black-Scholes domain
/// (S, K, T or σ non-positive); the result is not clamped or masked.
#[allow(non_snake_case)]
pub fn price(S: f64, K: f64, T: f64, r: f64, sigma: f64, option_type: OptionType) -> f64 {
    let d1 = d1(S, K, T, r, sigma);
    let d2 = d2(S, K, T, r, sigma);
    let df = (-r * T).exp();

    match option_type {
        OptionType::Call => S * norm_cdf(d1) - K * df * norm_cdf(d2),
        OptionType::Put => K * df * norm_cdf(-d2) - S * norm_cdf(-d1),
    }
}

/// First-order sensitivities of a European option price.
///
/// Theta is per year of calendar time; no per-day scaling is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂price/∂S
    pub delta: f64,
    /// ∂delta/∂S
    pub gamma: f64,
    /// ∂price/∂σ
    pub vega: f64,
    /// ∂price/∂T, negated (time decay per year)
    pub theta: f64,
    /// ∂price/∂r
    pub rho: f64,
}

/// The five standard Greeks for a European option.
///
/// Gamma and vega are variant-independent. `d1`/`d2` are recomputed through
/// the same intermediates as [`price`]; the same domain policy applies
/// (invalid inputs yield NaN fields).
#[allow(non_snake_case)]
pub fn greeks(S: f64, K: f64, T: f64, r: f64, sigma: f64, option_type: OptionType) -> Greeks {
    let d1 = d1(S, K, T, r, sigma);
    let d2 = d2(S, K, T, r, sigma);
    let df = (-r * T).exp();
    let sqrt_t = T.sqrt();
    let pdf_d1 = norm_pdf(d1);

    let (delta, theta, rho) = match option_type {
        OptionType::Call => (
            norm_cdf(d1),
            -(S * pdf_d1 * sigma) / (2.0 * sqrt_t) - r * K * df * norm_cdf(d2),
            K * T * df * norm_cdf(d2),
        ),
        OptionType::Put => (
            norm_cdf(d1) - 1.0,
            -(S * pdf_d1 * sigma) / (2.0 * sqrt_t) + r * K * df * norm_cdf(-d2),
            -K * T * df * norm_cdf(-d2),
        ),
    };

    Greeks {
        delta,
        gamma: pdf_d1 / (S * sigma * sqrt_t),
        vega: S * pdf_d1 * sqrt_t,
        theta,
        rho,
    }
}
