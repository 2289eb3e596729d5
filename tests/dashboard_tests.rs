use pricer_lib::{
    format_greeks, format_price, heatmap_grids, DashboardConfig, Greeks, MarketInputs, OptionType,
};

/// The default layout matches the reference control panel.
#[test]
fn test_default_slider_layout() {
    let config = DashboardConfig::default();
    config.validate().expect("Default config must validate");

    assert_eq!(config.spot.min, 50.0);
    assert_eq!(config.spot.max, 200.0);
    assert_eq!(config.spot.default, 100.0);
    assert_eq!(config.strike, config.spot);
    assert_eq!(config.vol_pct.min, 5.0);
    assert_eq!(config.vol_pct.max, 150.0);
    assert_eq!(config.vol_pct.default, 20.0);
    assert_eq!(config.maturity.min, 0.01);
    assert_eq!(config.maturity.max, 2.0);
    assert_eq!(config.rate_pct.max, 10.0);
    assert_eq!(config.heatmap_spot.points, 50);
    assert_eq!(config.heatmap_vol.points, 50);
}

/// Slider snapshots convert percent inputs to decimals on the way to the
/// pricer, exactly once.
#[test]
fn test_inputs_to_contract_conversion() {
    let config = DashboardConfig::default();
    let inputs = MarketInputs::defaults(&config);

    let contract = inputs.to_contract();
    assert_eq!(contract.s, 100.0);
    assert_eq!(contract.k, 100.0);
    assert_eq!(contract.t, 1.0);
    assert_eq!(contract.sigma, 0.20);
    assert_eq!(contract.r, 0.02);
    assert_eq!(contract.option_type, OptionType::Call);

    // Pricing through the contract matches the scalar pricer
    let px = contract.price();
    assert!((px - 8.9160).abs() < 1e-3, "Default panel price: {}", px);
    assert_eq!(
        px,
        pricer_lib::price(100.0, 100.0, 1.0, 0.02, 0.20, OptionType::Call)
    );
}

/// Partial TOML files are filled in from the default layout.
#[test]
fn test_config_from_partial_toml() {
    let text = r#"
        [vol_pct]
        min = 1.0
        max = 100.0
        default = 30.0

        [heatmap_vol]
        start = 0.01
        stop = 1.0
        points = 25
    "#;

    let config = DashboardConfig::from_toml_str(text).expect("Partial TOML should parse");
    assert_eq!(config.vol_pct.default, 30.0);
    assert_eq!(config.heatmap_vol.points, 25);
    // Untouched sections keep their defaults
    assert_eq!(config.spot, DashboardConfig::default().spot);
    assert_eq!(config.maturity, DashboardConfig::default().maturity);
}

/// Layouts that could push the pricer outside its numeric domain are
/// rejected at load time.
#[test]
fn test_config_validation_rejects_bad_ranges() {
    // Inverted slider range
    let mut config = DashboardConfig::default();
    config.spot.min = 300.0;
    assert!(config.validate().is_err(), "Inverted spot range must fail");

    // Default outside range
    let mut config = DashboardConfig::default();
    config.strike.default = 10.0;
    assert!(config.validate().is_err(), "Out-of-range default must fail");

    // Zero-volatility slider would hand the pricer sigma = 0
    let mut config = DashboardConfig::default();
    config.vol_pct.min = 0.0;
    assert!(config.validate().is_err(), "Zero vol floor must fail");

    // Zero-maturity slider
    let mut config = DashboardConfig::default();
    config.maturity.min = 0.0;
    assert!(config.validate().is_err(), "Zero maturity floor must fail");

    // Empty heatmap axis
    let mut config = DashboardConfig::default();
    config.heatmap_spot.points = 0;
    assert!(config.validate().is_err(), "Empty grid axis must fail");
}

/// Heatmap axes come straight from the configured grid layout.
#[test]
fn test_heatmap_grids_from_config() {
    let config = DashboardConfig::default();
    let (spots, vols) = heatmap_grids(&config);

    assert_eq!(spots.len(), 50);
    assert_eq!(vols.len(), 50);
    assert_eq!(spots[0], 50.0);
    assert_eq!(spots[49], 150.0);
    assert_eq!(vols[0], 0.05);
    assert!((vols[49] - 0.50).abs() < 1e-12);
}

/// Price box formatting: two decimals, thousands separators, `$` prefix.
#[test]
fn test_format_price() {
    assert_eq!(format_price(8.916), "$8.92");
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(1234.5), "$1,234.50");
    assert_eq!(format_price(1000000.0), "$1,000,000.00");
    assert_eq!(format_price(-3.2), "-$3.20");
}

/// Greek boxes render in dashboard order with per-Greek precision.
#[test]
fn test_format_greeks() {
    let g = Greeks {
        delta: 0.5596,
        gamma: 0.018762,
        vega: 37.524,
        theta: -5.0446,
        rho: 46.9463,
    };

    let boxes = format_greeks(&g);
    assert_eq!(boxes[0], "Δ Delta: 0.5596");
    assert_eq!(boxes[1], "Γ Gamma: 0.018762");
    assert_eq!(boxes[2], "V Vega:  37.5240");
    assert_eq!(boxes[3], "Θ Theta: -5.0446");
    assert_eq!(boxes[4], "ρ Rho:   46.9463");
}
