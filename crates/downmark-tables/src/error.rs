//! Errors raised while converting a single table.

/// Failure while converting one `<table>` subtree.
///
/// Both kinds are input-validity errors: they abort conversion of the
/// enclosing table and no partial output is produced. The caller decides
/// whether to skip the table, substitute its raw content, or abort the
/// whole document. Retrying an identical input is pointless.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A row contains a bare text node where only `th`/`td` cells may
    /// appear.
    #[error("cannot handle a text node in a table row")]
    MalformedRowStructure,

    /// Two rows declare different non-default alignments for one column.
    #[error("alignment in table column {column} is not consistent")]
    InconsistentColumnAlignment {
        /// Zero-based index of the offending column.
        column: usize,
    },
}
