//! Price-surface generation over a (spot × volatility) grid.
//!
//! Each cell is an independent evaluation of the scalar Black-Scholes pricer,
//! so the output matrix matches [`crate::models::bs::price`] bit-for-bit and
//! the evaluation order carries no meaning.

pub mod export;

pub use export::export_surface_csv;

use crate::models::bs::{price, OptionType};

/// What each surface cell holds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceMode {
    /// Cell = Black-Scholes price at (spot, vol).
    Price,
    /// Cell = price minus `reference`, for comparing against a baseline
    /// scenario. The reference is part of the variant, so diff surfaces
    /// cannot be requested without one.
    Diff { reference: f64 },
}

/// Evenly spaced grid of `n` points from `start` to `stop`, endpoints
/// included. `n == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = stop - start;
            (0..n)
                .map(|i| start + span * (i as f64) / ((n - 1) as f64))
                .collect()
        }
    }
}

/// Evaluate the option price over every (spot, vol) pair of the two grids.
///
/// Returns a `spot_grid.len() × vol_grid.len()` matrix where cell `[i][j]` is
/// `price(spot_grid[i], k, t, r, vol_grid[j], option_type)`, shifted by the
/// reference in [`SurfaceMode::Diff`]. The option variant is threaded through
/// to every cell; the original dashboard priced the heatmap as calls
/// regardless of the selected variant, which this deliberately corrects.
///
/// Cells are independent pure-function evaluations; the same NaN-propagation
/// policy as the scalar pricer applies per cell.
pub fn generate_surface(
    spot_grid: &[f64],
    vol_grid: &[f64],
    k: f64,
    t: f64,
    r: f64,
    option_type: OptionType,
    mode: SurfaceMode,
) -> Vec<Vec<f64>> {
    let mut z = Vec::with_capacity(spot_grid.len());

    for &spot in spot_grid {
        let mut row = Vec::with_capacity(vol_grid.len());
        for &vol in vol_grid {
            let px = price(spot, k, t, r, vol, option_type);
            row.push(match mode {
                SurfaceMode::Price => px,
                SurfaceMode::Diff { reference } => px - reference,
            });
        }
        z.push(row);
    }

    z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_degenerate_lengths() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(50.0, 150.0, 50);
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 50.0);
        assert_eq!(grid[49], 150.0);
    }
}
