//! # Pricer-Lib: Black-Scholes Pricing and Price-Surface Generation
//!
//! `pricer-lib` is the computational core of an interactive option-pricing
//! dashboard. It provides closed-form Black-Scholes prices and Greeks for
//! European options, grid evaluation of the price over (spot × volatility)
//! for heatmap display, and the pure-function glue a dashboard frontend
//! needs: slider layout configuration, percent-to-decimal conversion and
//! display formatting.
//!
//! ## Core Operations
//!
//! - [`price`]: European call/put price from (S, K, T, r, σ)
//! - [`greeks`]: delta, gamma, vega, theta and rho for the same inputs
//! - [`generate_surface`]: dense price matrix over two input grids
//!
//! ## Quick Start
//!
//! ```rust
//! use pricer_lib::{generate_surface, greeks, linspace, price, OptionType, SurfaceMode};
//!
//! // Scalar pricing for the panel
//! let px = price(100.0, 100.0, 1.0, 0.02, 0.20, OptionType::Call);
//! let g = greeks(100.0, 100.0, 1.0, 0.02, 0.20, OptionType::Call);
//! assert!((px - 8.916).abs() < 1e-3);
//! assert!(g.delta > 0.0 && g.delta < 1.0);
//!
//! // Heatmap matrix for the surface view
//! let spots = linspace(50.0, 150.0, 50);
//! let vols = linspace(0.05, 0.50, 50);
//! let surface = generate_surface(
//!     &spots, &vols, 100.0, 1.0, 0.02, OptionType::Call, SurfaceMode::Price,
//! );
//! assert_eq!(surface.len(), 50);
//! assert_eq!(surface[0].len(), 50);
//! ```
//!
//! ## Domain Policy
//!
//! The pricing functions perform no input validation: non-positive spot,
//! strike, maturity or volatility propagate NaN/infinity per IEEE-754. The
//! [`dashboard`] layer carries the slider ranges that keep hosts inside the
//! valid domain.
//!
//! Every computation is a pure, synchronous function of its arguments; there
//! is no shared state, caching or I/O in the core.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod dashboard;
pub mod models;
pub mod surface;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Pricer: scalar price, Greeks and their shared intermediates
pub use models::bs::{d1, d2, greeks, norm_cdf, norm_pdf, price, Greeks, OptionType};

// Surface generator and grid helpers
pub use surface::{export_surface_csv, generate_surface, linspace, SurfaceMode};

// Dashboard glue: configuration, input conversion and display formatting
pub use dashboard::{
    format_greeks, format_price, heatmap_grids, ContractParams, DashboardConfig, GridAxis,
    MarketInputs, SliderRange,
};
