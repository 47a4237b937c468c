//! Tree-node capabilities shared across the downmark conversion pipeline.
//!
//! The converter never parses HTML itself. Upstream code hands it an
//! already-parsed tree, and the conversion passes work against the
//! [`DomNode`] trait rather than any specific tree representation:
//! a node exposes its kind, tag name, attributes, ordered children, and
//! an identity used to key side-tables.
//!
//! [`TreeNode`] is the bundled owned-tree adapter, and [`ReplacementMap`]
//! is the side-table through which the inline-conversion pass hands each
//! cell's precomputed markdown text to the table engine.

mod node;
mod replacement;

pub use node::{DomNode, NodeId, NodeKind, TreeNode};
pub use replacement::ReplacementMap;
