//! Console tables, CSV and HTML output

use crate::app::Charts;
use crate::error::RunnerResult;
use comfy_table::{CellAlignment, Table, presets};
use folio_analytics::ShareRow;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const SHARES_CSV: &str = "shares.csv";
pub const RATIOS_CSV: &str = "ratios.csv";
pub const RATIOS_HTML: &str = "ratios.html";
pub const VALUE_HTML: &str = "value.html";

/// Share rows as an aligned text table with a leading row index
pub fn format_share_table(rows: &[ShareRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_FULL_CONDENSED)
        .set_header(vec!["", "ticker", "name", "price", "sector", "share_type", "exchange"]);

    for (i, r) in rows.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            r.ticker.clone(),
            r.name.clone(),
            r.price.to_string(),
            r.sector.clone(),
            r.share_type.clone(),
            r.exchange.clone(),
        ]);
    }
    for column in table.column_iter_mut().skip(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.to_string()
}

/// Serialize `rows` as CSV with a header line
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> RunnerResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// `<results_dir>/shares.csv`
pub fn write_shares_csv(results_dir: &Path, rows: &[ShareRow]) -> RunnerResult<PathBuf> {
    let path = results_dir.join(SHARES_CSV);
    write_csv(&path, rows)?;
    Ok(path)
}

/// Standalone page around a chart fragment
pub fn html_page(title: &str, fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        title, fragment
    )
}

/// Write both chart pages and the treemap dataset into `dir`
pub fn write_charts(dir: &Path, charts: &Charts) -> RunnerResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let ratios_html = dir.join(RATIOS_HTML);
    fs::write(&ratios_html, html_page("Portfolio", &charts.ratios_html))?;

    let value_html = dir.join(VALUE_HTML);
    fs::write(&value_html, html_page("Portfolio value", &charts.value_html))?;

    let ratios_csv = dir.join(RATIOS_CSV);
    write_csv(&ratios_csv, &charts.ratios.rows)?;

    Ok(vec![ratios_html, value_html, ratios_csv])
}
