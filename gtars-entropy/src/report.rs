use std::io::Write;

use fxhash::FxHashMap;

use crate::consts::{DELIMITER, ENTROPY_3P_COL_NAME, ENTROPY_5P_COL_NAME, NAME_COL_NAME};
use crate::errors::Result;
use crate::models::EntropyResult;

///
/// Render an entropy value.
///
/// Uses the shortest representation that round-trips and always keeps a
/// decimal point, so `0` is written as `0.0`. Values below `1e-4` switch to
/// exponent form (`1e-17`), which still parses as `f64`.
///
pub fn format_entropy(value: f64) -> String {
    format!("{:?}", value)
}

pub fn header_line() -> String {
    format!(
        "{}{}{}{}{}",
        NAME_COL_NAME, DELIMITER, ENTROPY_5P_COL_NAME, DELIMITER, ENTROPY_3P_COL_NAME
    )
}

impl EntropyResult {
    /// One tab-delimited report row, without a line terminator.
    pub fn as_line(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.name,
            DELIMITER,
            format_entropy(self.entropy5p),
            DELIMITER,
            format_entropy(self.entropy3p)
        )
    }
}

///
/// Build the report: a header followed by one row per locus, sorted by locus name.
///
pub fn report(results: &FxHashMap<String, EntropyResult>) -> Vec<String> {
    // map order is arbitrary
    let mut names: Vec<&String> = results.keys().collect();
    names.sort();

    let mut lines = Vec::with_capacity(names.len() + 1);
    lines.push(header_line());
    lines.extend(names.into_iter().map(|name| results[name].as_line()));

    lines
}

///
/// Write the report to `writer`, one line per row.
///
/// # Arguments
/// - results: entropy per locus name
/// - writer: destination, e.g. stdout
///
pub fn write_report<W: Write>(results: &FxHashMap<String, EntropyResult>, mut writer: W) -> Result<()> {
    for line in report(results) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    Ok(())
}
