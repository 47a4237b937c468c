//! Row and separator formatting.

use crate::align::Alignment;
use crate::width::{display_width, pad_left, pad_right};

/// Join the rendered cells of one row.
///
/// A single-column table still needs a leading pipe to be recognized as
/// a GFM table.
fn join_columns(columns: &[String]) -> String {
    match columns {
        [single] => format!("| {single}"),
        _ => columns.join(" | "),
    }
}

fn dashes(count: usize) -> String {
    "-".repeat(count)
}

/// Pad one row's cells to the shared column widths and join them into a
/// single GFM table line.
///
/// Padding is measured in display width, so re-formatting an
/// already-padded cell is a no-op. Only trailing whitespace is trimmed
/// from the joined line; padding inside it is preserved.
#[must_use]
pub fn format_row(row: &[String], alignments: &[Alignment], widths: &[usize]) -> String {
    let cells: Vec<String> = row
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let alignment = alignments.get(i).copied().unwrap_or_default();
            let width = widths.get(i).copied().unwrap_or(0);
            match alignment {
                Alignment::Right => pad_left(cell, width),
                Alignment::Center => {
                    let padding = width.saturating_sub(display_width(cell));
                    let left = padding / 2;
                    pad_right(&pad_left(cell, display_width(cell) + left), width)
                }
                Alignment::Left | Alignment::None => pad_right(cell, width),
            }
        })
        .collect();
    join_columns(&cells).trim_end().to_owned()
}

/// Render the separator line that declares column count and alignment
/// via colon placement.
///
/// Each column is a dash run filling the column's width, with colons
/// substituted at the ends the alignment calls for. Joined with the same
/// column-join rule as [`format_row`], so the separator parses as the
/// same column count as every data row.
#[must_use]
pub fn format_separator(alignments: &[Alignment], widths: &[usize]) -> String {
    let columns: Vec<String> = alignments
        .iter()
        .enumerate()
        .map(|(i, alignment)| {
            let width = widths.get(i).copied().unwrap_or(0);
            match alignment {
                Alignment::Center => format!(":{}:", dashes(width.saturating_sub(2))),
                Alignment::Left => format!(":{}", dashes(width.saturating_sub(1))),
                Alignment::Right => format!("{}:", dashes(width.saturating_sub(1))),
                Alignment::None => dashes(width),
            }
        })
        .collect();
    join_columns(&columns)
}
