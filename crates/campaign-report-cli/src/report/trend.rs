//! `trend` command: export the trend dataset as CSV or JSON.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use campaign_report::trend::{build_trend_dataset, TrendDataset};

use crate::util::write_bytes_to_file;

/// Write the dataset as CSV: a `month` column followed by one column per series.
pub fn write_trend_csv<W: Write>(dataset: &TrendDataset, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["month".to_string()];
    header.extend(dataset.series_names().iter().map(|s| s.to_string()));
    wtr.write_record(&header)?;

    for row in dataset.rows() {
        let mut record = vec![row.label.to_string()];
        record.extend(row.values.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn trend_csv_bytes(dataset: &TrendDataset) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_trend_csv(dataset, &mut buffer)?;
    Ok(buffer)
}

pub fn run_trend(output: Option<&Path>, json: bool) -> Result<()> {
    let dataset = build_trend_dataset();
    let bytes = if json {
        let mut bytes = serde_json::to_vec_pretty(&dataset)?;
        bytes.push(b'\n');
        bytes
    } else {
        trend_csv_bytes(&dataset)?
    };

    match output {
        Some(path) => {
            write_bytes_to_file(path, &bytes)
                .with_context(|| format!("Failed to write trend data: {}", path.display()))?;
            log::info!("Trend data written to {}", path.display());
        }
        None => {
            std::io::stdout()
                .write_all(&bytes)
                .context("Failed to write trend data to stdout")?;
        }
    }
    Ok(())
}
