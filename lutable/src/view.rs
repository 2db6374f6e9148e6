//! Render output of a table, ready for painting.

use crate::{Align, CellContent, ColumnWidth};

/// Header glyph state of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column cannot be sorted; no glyph.
    Unsortable,
    /// Sortable but not the active column.
    Idle,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(self) -> Option<char> {
        match self {
            SortIndicator::Unsortable => None,
            SortIndicator::Idle => Some('↕'),
            SortIndicator::Ascending => Some('▲'),
            SortIndicator::Descending => Some('▼'),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub align: Align,
    pub width: ColumnWidth,
    pub sort: SortIndicator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    /// Key of the column this cell belongs to.
    pub column: String,
    pub align: Align,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Stable identity from the table's row key.
    pub key: String,
    /// Position in the displayed sequence.
    pub index: usize,
    /// Draw with the alternate background.
    pub striped: bool,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Rows(Vec<RowView>),
    /// No rows: one placeholder spanning `span` columns.
    Empty { message: String, span: usize },
}

/// Everything needed to draw one frame of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub header: Vec<HeaderCell>,
    pub body: Body,
    pub striped: bool,
    pub bordered: bool,
    pub hoverable: bool,
    pub loading: bool,
}

impl TableView {
    /// Displayed rows; empty for the placeholder body.
    pub fn rows(&self) -> &[RowView] {
        match &self.body {
            Body::Rows(rows) => rows,
            Body::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, Body::Empty { .. })
    }
}
