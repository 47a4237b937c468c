//! Whole-table rendering.

use downmark_dom::{DomNode, ReplacementMap};

use crate::error::TableError;
use crate::extract::{TableGrid, extract_grid};
use crate::format::{format_row, format_separator};
use crate::width::column_widths;

/// Convert one `<table>` subtree into a GFM table block.
///
/// The block is the formatted header row, the separator line, then each
/// body row, joined by newlines, ready to be embedded verbatim into the
/// enclosing markdown document. Identical input trees always produce
/// byte-identical output.
///
/// # Errors
///
/// Propagates [`extract_grid`]'s input-validity errors; no partial
/// output is produced for a failed table.
pub fn render_table<N: DomNode>(
    table: &N,
    replacements: &ReplacementMap,
) -> Result<String, TableError> {
    let grid = extract_grid(table, replacements)?;
    Ok(render_grid(&grid))
}

/// Render an already-extracted grid.
///
/// Widths are computed once over the whole grid and shared by every
/// line. A grid with no rows renders as an empty string; GFM has no
/// representation for a rowless table.
#[must_use]
pub fn render_grid(grid: &TableGrid) -> String {
    let Some((header, body)) = grid.rows.split_first() else {
        return String::new();
    };
    let widths = column_widths(&grid.rows);

    let mut lines = Vec::with_capacity(grid.rows.len() + 1);
    lines.push(format_row(header, &grid.alignments, &widths));
    lines.push(format_separator(&grid.alignments, &widths));
    for row in body {
        lines.push(format_row(row, &grid.alignments, &widths));
    }
    lines.join("\n")
}
