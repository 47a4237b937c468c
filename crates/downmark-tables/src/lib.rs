//! GFM table rendering for the downmark HTML-to-Markdown converter.
//!
//! Takes an already-parsed `<table>` subtree plus a
//! [`ReplacementMap`](downmark_dom::ReplacementMap) of per-cell inline
//! markdown, and produces the pipe-delimited table block: header row,
//! alignment separator, body rows.
//!
//! # Architecture
//!
//! The engine is a short pipeline over the [`DomNode`](downmark_dom::DomNode)
//! capability trait:
//!
//! - [`extract_grid`]: worklist traversal of the subtree into a
//!   [`TableGrid`] of cell text and per-column [`Alignment`]
//! - [`column_widths`]: display-width maximum per column, header included
//! - [`format_row`] / [`format_separator`]: padded GFM lines
//! - [`render_table`]: the whole pipeline in one call
//!
//! Cell padding is measured in display width, not characters, so
//! mixed-script content stays visually aligned.
//!
//! # Example
//!
//! ```
//! use downmark_dom::{NodeId, ReplacementMap, TreeNode};
//! use downmark_tables::render_table;
//!
//! let mut replacements = ReplacementMap::new();
//! replacements.insert(NodeId::new(1), "Name");
//! replacements.insert(NodeId::new(2), "Al");
//!
//! let table = TreeNode::element("table").with_children(vec![
//!     TreeNode::element("tr")
//!         .with_children(vec![TreeNode::element("th").with_id(NodeId::new(1))]),
//!     TreeNode::element("tr")
//!         .with_children(vec![TreeNode::element("td").with_id(NodeId::new(2))]),
//! ]);
//!
//! let rendered = render_table(&table, &replacements)?;
//! assert_eq!(rendered, "| Name\n| ----\n| Al");
//! # Ok::<(), downmark_tables::TableError>(())
//! ```

mod align;
mod error;
mod extract;
mod format;
mod render;
mod width;

pub use align::Alignment;
pub use error::TableError;
pub use extract::{TableGrid, extract_grid};
pub use format::{format_row, format_separator};
pub use render::{render_grid, render_table};
pub use width::{column_widths, display_width};
