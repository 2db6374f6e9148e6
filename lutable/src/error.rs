use thiserror::Error;

/// Errors raised while building a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate column key: {0}")]
    DuplicateColumn(String),
}
