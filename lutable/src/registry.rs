//! Ordered, key-unique column registry.

use std::collections::HashSet;

use crate::{Column, TableError};

/// The columns of one table instance, in display order.
///
/// Keys are unique; the set is fixed once built.
pub struct ColumnSet<R> {
    columns: Vec<Column<R>>,
}

impl<R> Clone for ColumnSet<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> std::fmt::Debug for ColumnSet<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.columns).finish()
    }
}

impl<R> ColumnSet<R> {
    /// Build a column set, rejecting duplicate keys.
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(TableError::DuplicateColumn(column.key.clone()));
            }
        }
        Ok(Self { columns })
    }

    pub fn get(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Position of a column by key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    /// Column at display position `index`.
    pub fn at(&self, index: usize) -> Option<&Column<R>> {
        self.columns.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column<R>> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<'a, R> IntoIterator for &'a ColumnSet<R> {
    type Item = &'a Column<R>;
    type IntoIter = std::slice::Iter<'a, Column<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
