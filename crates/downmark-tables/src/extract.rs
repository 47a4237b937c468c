//! Table-grid extraction from a parsed `<table>` subtree.

use std::collections::VecDeque;

use downmark_dom::{DomNode, ReplacementMap};

use crate::align::{Alignment, cell_alignment};
use crate::error::TableError;

/// Intermediate row/column form of one table.
///
/// Row 0 is the header row; the rest are body rows. Built once per
/// `<table>` element, consumed immediately by rendering, and discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableGrid {
    /// One alignment per column, [`Alignment::None`] when undeclared.
    pub alignments: Vec<Alignment>,
    /// Cell text per row, in traversal order.
    pub rows: Vec<Vec<String>>,
}

/// Extract rows, cell text, and per-column alignment from a table
/// subtree.
///
/// The subtree is walked breadth-first with an explicit worklist, so
/// grouping wrappers (`thead`, `tbody`, `tfoot`) are flattened
/// transparently while row order is preserved, and arbitrarily deep
/// markup cannot exhaust the stack. Cell text comes from
/// `replacements`, keyed by the cell's node identity; a cell with no
/// entry contributes empty text.
///
/// # Errors
///
/// [`TableError::MalformedRowStructure`] when a row holds a bare text
/// node, and [`TableError::InconsistentColumnAlignment`] when two rows
/// declare different non-default alignments for the same column.
pub fn extract_grid<N: DomNode>(
    table: &N,
    replacements: &ReplacementMap,
) -> Result<TableGrid, TableError> {
    let mut alignments: Vec<Alignment> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();

    let mut queue = VecDeque::from([table]);
    while let Some(element) = queue.pop_front() {
        for child in element.children() {
            if child.tag() == Some("tr") {
                let (cells, hints) = extract_cells(child, replacements)?;
                rows.push(cells);
                reconcile_alignments(&mut alignments, &hints)?;
            } else if child.is_element() {
                queue.push_back(child);
            }
        }
    }

    // Inconsistent trailing empty cells can leave alignment artifacts
    // past the header's column count.
    let header_columns = rows.first().map_or(0, Vec::len);
    while alignments.len() > header_columns && alignments.last() == Some(&Alignment::None) {
        alignments.pop();
    }

    tracing::debug!(
        rows = rows.len(),
        columns = header_columns,
        "Extracted table grid"
    );

    Ok(TableGrid { alignments, rows })
}

/// Collect cell text and alignment hints from one `tr` element.
fn extract_cells<N: DomNode>(
    row: &N,
    replacements: &ReplacementMap,
) -> Result<(Vec<String>, Vec<Alignment>), TableError> {
    let mut cells = Vec::new();
    let mut hints = Vec::new();
    for child in row.children() {
        if matches!(child.tag(), Some("th" | "td")) {
            let text = replacements.get(child.id()).unwrap_or_default();
            cells.push(text.to_owned());
            hints.push(cell_alignment(child));
        } else if child.is_text() {
            return Err(TableError::MalformedRowStructure);
        }
    }
    Ok((cells, hints))
}

/// Merge one row's alignment hints into the per-column record.
///
/// The first non-default alignment seen for a column is authoritative;
/// a later row declaring a different non-default alignment for the same
/// column is a contradiction.
fn reconcile_alignments(
    recorded: &mut Vec<Alignment>,
    row: &[Alignment],
) -> Result<(), TableError> {
    for (column, &alignment) in row.iter().enumerate() {
        match recorded.get_mut(column) {
            None => recorded.push(alignment),
            Some(slot) if *slot == Alignment::None => *slot = alignment,
            Some(slot) if alignment != Alignment::None && alignment != *slot => {
                return Err(TableError::InconsistentColumnAlignment { column });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
