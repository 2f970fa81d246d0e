//! Rendering forecast results for export

use csv::Writer;

use crate::error::{Error, Result};
use crate::forecast::ForecastResult;

/// Export projected points as CSV
/// Format: date,net_worth,assets,liabilities,confidence,confidence_lower,confidence_upper
pub fn points_to_csv(result: &ForecastResult) -> Result<String> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record([
        "date",
        "net_worth",
        "assets",
        "liabilities",
        "confidence",
        "confidence_lower",
        "confidence_upper",
    ])?;

    for point in &result.points {
        wtr.write_record([
            point.date.format("%Y-%m-%d").to_string(),
            format!("{:.0}", point.net_worth),
            format!("{:.0}", point.assets),
            format!("{:.0}", point.liabilities),
            format!("{:.2}", point.confidence),
            format!("{:.0}", point.confidence_lower),
            format!("{:.0}", point.confidence_upper),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| Error::InvalidData(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(e.to_string()))
}

/// Export a result as pretty-printed JSON
pub fn result_to_json(result: &ForecastResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
