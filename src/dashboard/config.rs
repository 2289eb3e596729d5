//! Dashboard configuration: slider ranges and heatmap grid layout.
//!
//! The defaults reproduce the control panel of the reference dashboard:
//! spot/strike sliders over [50, 200], volatility in percent over [5, 150],
//! maturity in years over [0.01, 2], rate in percent over [0, 10], and a
//! 50×50 heatmap over spot 50..150 and volatility 0.05..0.50.

use anyhow::{anyhow, Result};

/// Inclusive slider range with its initial position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl SliderRange {
    pub fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    /// Clamp a value into the slider's range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !(self.min < self.max) {
            return Err(anyhow!(
                "{} slider range is inverted or empty: [{}, {}]",
                name,
                self.min,
                self.max
            ));
        }
        if !self.contains(self.default) {
            return Err(anyhow!(
                "{} slider default {} outside range [{}, {}]",
                name,
                self.default,
                self.min,
                self.max
            ));
        }
        Ok(())
    }
}

/// One axis of the heatmap grid: `points` evenly spaced values over
/// [`start`, `stop`], endpoints included.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridAxis {
    pub start: f64,
    pub stop: f64,
    pub points: usize,
}

impl GridAxis {
    pub fn new(start: f64, stop: f64, points: usize) -> Self {
        Self { start, stop, points }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.points == 0 {
            return Err(anyhow!("{} grid axis has zero points", name));
        }
        if !(self.start <= self.stop) {
            return Err(anyhow!(
                "{} grid axis is inverted: [{}, {}]",
                name,
                self.start,
                self.stop
            ));
        }
        Ok(())
    }
}

/// Full layout of the pricing dashboard's inputs and heatmap.
///
/// Loadable from TOML (with the `serde` feature); any omitted section falls
/// back to the defaults above.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DashboardConfig {
    /// Spot price slider, in currency units.
    pub spot: SliderRange,
    /// Strike price slider, in currency units.
    pub strike: SliderRange,
    /// Volatility slider, in percent (20 means σ = 0.20).
    pub vol_pct: SliderRange,
    /// Time-to-maturity slider, in years.
    pub maturity: SliderRange,
    /// Risk-free rate slider, in percent (2 means r = 0.02).
    pub rate_pct: SliderRange,
    /// Heatmap spot axis, in currency units.
    pub heatmap_spot: GridAxis,
    /// Heatmap volatility axis, in decimal vol.
    pub heatmap_vol: GridAxis,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            spot: SliderRange::new(50.0, 200.0, 100.0),
            strike: SliderRange::new(50.0, 200.0, 100.0),
            vol_pct: SliderRange::new(5.0, 150.0, 20.0),
            maturity: SliderRange::new(0.01, 2.0, 1.0),
            rate_pct: SliderRange::new(0.0, 10.0, 2.0),
            heatmap_spot: GridAxis::new(50.0, 150.0, 50),
            heatmap_vol: GridAxis::new(0.05, 0.50, 50),
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration from TOML text and validate it.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        use anyhow::Context;

        let config: Self = toml::from_str(text).context("Failed to parse dashboard config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file and validate it.
    #[cfg(feature = "serde")]
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        use anyhow::Context;

        let text = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&text)
    }

    /// Check that every slider and grid axis describes a usable range.
    ///
    /// The pricing core performs no validation of its own, so this is where
    /// the σ > 0 and T > 0 domain requirements are enforced.
    pub fn validate(&self) -> Result<()> {
        self.spot.validate("spot")?;
        self.strike.validate("strike")?;
        self.vol_pct.validate("vol_pct")?;
        self.maturity.validate("maturity")?;
        self.rate_pct.validate("rate_pct")?;
        self.heatmap_spot.validate("heatmap_spot")?;
        self.heatmap_vol.validate("heatmap_vol")?;

        if self.vol_pct.min <= 0.0 {
            return Err(anyhow!(
                "Volatility slider must stay strictly positive, got min {}",
                self.vol_pct.min
            ));
        }
        if self.maturity.min <= 0.0 {
            return Err(anyhow!(
                "Maturity slider must stay strictly positive, got min {}",
                self.maturity.min
            ));
        }
        if self.heatmap_vol.start <= 0.0 {
            return Err(anyhow!(
                "Heatmap volatility axis must start above zero, got {}",
                self.heatmap_vol.start
            ));
        }

        Ok(())
    }
}
