// demos/heatmap_demo.rs
// Generates the dashboard's default price surface and renders it as an SVG
// heatmap (volatility on x, spot on y), plus a CSV dump of the raw matrix.
//
// Usage:
//     cargo run --example heatmap_demo [call|put]
//
// Output is written to price_heatmap.svg and price_surface.csv in the
// working directory.

use std::env;
use std::error::Error;
use std::fs::File;

use plotters::prelude::*;
use pricer_lib::{
    export_surface_csv, generate_surface, heatmap_grids, DashboardConfig, MarketInputs,
    OptionType, SurfaceMode,
};

fn main() -> Result<(), Box<dyn Error>> {
    let option_type: OptionType = env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("call")
        .parse()?;

    let config = DashboardConfig::default();
    config.validate()?;

    let contract = MarketInputs::defaults(&config).to_contract();
    let (spots, vols) = heatmap_grids(&config);

    let surface = generate_surface(
        &spots,
        &vols,
        contract.k,
        contract.t,
        contract.r,
        option_type,
        SurfaceMode::Price,
    );

    println!(
        "Surface: {} spots x {} vols | K={:.0} T={:.2}y r={:.2}% ({})",
        spots.len(),
        vols.len(),
        contract.k,
        contract.t,
        contract.r * 100.0,
        option_type
    );

    export_surface_csv(File::create("price_surface.csv")?, &spots, &vols, &surface)?;
    println!("Wrote price_surface.csv");

    // Color scale bounds from the actual data
    let mut min_px = f64::INFINITY;
    let mut max_px = f64::NEG_INFINITY;
    for row in &surface {
        for &px in row {
            min_px = min_px.min(px);
            max_px = max_px.max(px);
        }
    }
    let span = (max_px - min_px).max(1e-12);

    let root = SVGBackend::new("price_heatmap.svg", (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let vol_min = config.heatmap_vol.start;
    let vol_max = config.heatmap_vol.stop;
    let spot_min = config.heatmap_spot.start;
    let spot_max = config.heatmap_spot.stop;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("Option Price Heatmap ({})", option_type),
            ("sans-serif", 30),
        )
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(vol_min..vol_max, spot_min..spot_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Volatility")
        .y_desc("Spot Price")
        .draw()?;

    // One filled rectangle per grid cell, hue mapped to normalized price
    let vol_step = (vol_max - vol_min) / vols.len() as f64;
    let spot_step = (spot_max - spot_min) / spots.len() as f64;

    chart.draw_series(surface.iter().enumerate().flat_map(|(i, row)| {
        row.iter().enumerate().map(move |(j, &px)| {
            let t = (px - min_px) / span;
            let color = HSLColor(0.7 * (1.0 - t), 0.85, 0.45);
            let x0 = vol_min + vol_step * j as f64;
            let y0 = spot_min + spot_step * i as f64;
            Rectangle::new(
                [(x0, y0), (x0 + vol_step, y0 + spot_step)],
                color.filled(),
            )
        })
    }))?;

    root.present()?;
    println!("Wrote price_heatmap.svg");

    Ok(())
}
