//! Color-coded `.xlsx` rendering of a [`Comparison`].

use std::{borrow::Cow, path::Path};

use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook};

use crate::core::{Comparison, MatchStatus};

/// Fill for rows whose identifier is in the registry.
pub const MATCH_FILL: u32 = 0xC6EFCE;
/// Fill for rows whose identifier is unknown.
pub const MISMATCH_FILL: u32 = 0xFFC7CE;

/// Excel rejects cell strings longer than this (counted in UTF-16 units).
pub const MAX_CELL_LEN: usize = 32_767;

const SHEET_NAME: &str = "rc.type comparison";

fn row_format(status: MatchStatus) -> Format {
    let fill = match status {
        MatchStatus::Match => MATCH_FILL,
        MatchStatus::Mismatch => MISMATCH_FILL,
    };
    Format::new()
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(fill))
}

/// Cut a value down to what a single cell can hold.
fn fit_cell(value: &str) -> Cow<'_, str> {
    let mut units = 0;
    for (idx, c) in value.char_indices() {
        units += c.len_utf16();
        if units > MAX_CELL_LEN {
            return Cow::Owned(value[..idx].to_string());
        }
    }
    Cow::Borrowed(value)
}

/// Write the comparison to `path` as a single-sheet workbook.
///
/// The header row is left unstyled; every cell of a result row gets the fill for its status.
/// Values longer than [`MAX_CELL_LEN`] are truncated in the sheet only.
pub fn write_workbook(comparison: &Comparison, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in comparison.headers().iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    let match_format = row_format(MatchStatus::Match);
    let mismatch_format = row_format(MatchStatus::Mismatch);

    for (i, result) in comparison.results.iter().enumerate() {
        let row = (i + 1) as u32;
        let format = if result.status.is_match() {
            &match_format
        } else {
            &mismatch_format
        };
        for (col, value) in result.cells(comparison.titled).into_iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, fit_cell(value), format)?;
        }
    }

    worksheet.autofit();

    workbook
        .save(path)
        .with_context(|| format!("Failed to write spreadsheet: {}", path.display()))?;
    Ok(())
}
