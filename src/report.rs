//! Streaming CSV report writer
//!
//! One row per input line, written as soon as both scores are computed.
//! Rows are independent; nothing is buffered beyond the current line, so
//! arbitrarily long inputs stream in constant memory.

use std::io::{BufRead, Write};

use crate::score;

/// Fixed CSV header row
pub const HEADER: &str = "sequence,GRAVY,net_charge_at_pH_7";

/// Format a score with a leading space for non-negative values.
///
/// Reproduces the `% .Nf` convention: the sign column holds a space for
/// non-negative values and `-` otherwise, keeping numeric fields aligned.
fn signed_field(value: f64, decimals: usize) -> String {
    // Normalize -0.0 so it renders with the leading space
    let value = if value == 0.0 { 0.0 } else { value };
    if value < 0.0 {
        format!("{value:.decimals$}")
    } else {
        format!(" {value:.decimals$}")
    }
}

/// Stream sequences from `input` and write one CSV row per line to `output`.
///
/// Each line is trimmed of surrounding whitespace and uppercased before
/// scoring; a blank line still produces a row (empty sequence, both scores
/// zero). The first read or write error aborts the run.
pub fn write_report<R: BufRead, W: Write>(input: R, mut output: W) -> std::io::Result<()> {
    writeln!(output, "{HEADER}")?;

    let mut rows = 0u64;
    for line in input.lines() {
        let line = line?;
        let sequence = line.trim().to_ascii_uppercase();
        let gravy = score::gravy(sequence.as_bytes());
        let charge = score::net_charge(sequence.as_bytes());
        writeln!(
            output,
            "{sequence},{},{}",
            signed_field(gravy, 2),
            signed_field(charge, 1)
        )?;
        rows += 1;
    }

    output.flush()?;
    log::debug!("wrote {rows} report rows");
    Ok(())
}
