//! Ragged score table in CSV form.
//!
//! One column per collection, header `"{label} Scores"`, rows padded with
//! empty cells up to the longest column. Rows end in `\r\n`.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

const ROW_TERMINATOR: &str = "\r\n";

/// One labelled column of scores.
#[derive(Clone, Copy, Debug)]
pub struct TableColumn<'a> {
    pub label: &'a str,
    pub scores: &'a [f64],
}

/// Shortest round-trip form, written the way Python's `repr(float)` does:
/// plain decimal with a fractional part (`650250.0`, `0.25`) for magnitudes
/// in `[1e-4, 1e16)`, exponent form (`1e+16`, `2.5e-05`) outside it.
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }
    let s = value.to_string();
    if s.contains('.') {
        s
    } else {
        s + ".0"
    }
}

/// `1e16` -> `1e+16`: explicit sign, at least two exponent digits.
fn exponent_form(value: f64) -> String {
    let s = format!("{value:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn write_row<W: Write>(writer: &mut W, cells: &[String]) -> std::io::Result<()> {
    let line: Vec<String> = cells.iter().map(|c| escape_cell(c)).collect();
    write!(writer, "{}{}", line.join(","), ROW_TERMINATOR)
}

/// Write the header and every score row to `writer`.
pub fn write_score_table<W: Write>(writer: &mut W, columns: &[TableColumn]) -> std::io::Result<()> {
    let header: Vec<String> = columns
        .iter()
        .map(|c| format!("{} Scores", c.label))
        .collect();
    write_row(writer, &header)?;

    let rows = columns.iter().map(|c| c.scores.len()).max().unwrap_or(0);
    for i in 0..rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| c.scores.get(i).map(|&s| format_score(s)).unwrap_or_default())
            .collect();
        write_row(writer, &cells)?;
    }
    Ok(())
}

/// Write the score table to a file, replacing any existing one.
pub fn save_score_table(path: &Path, columns: &[TableColumn]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_score_table(&mut writer, columns)?;
    writer.flush()?;
    Ok(())
}
