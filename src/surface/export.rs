//! CSV export of a generated price surface.

use std::io::Write;

use anyhow::{anyhow, Result};

/// Write a surface as CSV: a header of `spot` followed by one column per
/// volatility grid point, then one row per spot grid point.
///
/// Fails if the matrix shape does not match the grids or on I/O errors.
pub fn export_surface_csv<W: Write>(
    writer: W,
    spot_grid: &[f64],
    vol_grid: &[f64],
    surface: &[Vec<f64>],
) -> Result<()> {
    if surface.len() != spot_grid.len() {
        return Err(anyhow!(
            "Surface has {} rows but spot grid has {} points",
            surface.len(),
            spot_grid.len()
        ));
    }

    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(vol_grid.len() + 1);
    header.push("spot".to_string());
    for vol in vol_grid {
        header.push(format!("{}", vol));
    }
    wtr.write_record(&header)?;

    for (spot, row) in spot_grid.iter().zip(surface) {
        if row.len() != vol_grid.len() {
            return Err(anyhow!(
                "Surface row has {} cells but vol grid has {} points",
                row.len(),
                vol_grid.len()
            ));
        }

        let mut record = Vec::with_capacity(vol_grid.len() + 1);
        record.push(format!("{}", spot));
        for value in row {
            record.push(format!("{}", value));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_shape_mismatch() {
        let mut buf = Vec::new();
        let result = export_surface_csv(&mut buf, &[100.0, 110.0], &[0.2], &[vec![1.0]]);
        assert!(result.is_err(), "Row count mismatch should fail");
    }

    #[test]
    fn test_export_round_numbers() {
        let mut buf = Vec::new();
        export_surface_csv(
            &mut buf,
            &[100.0],
            &[0.2, 0.3],
            &[vec![8.5, 12.25]],
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "spot,0.2,0.3\n100,8.5,12.25\n");
    }
}
