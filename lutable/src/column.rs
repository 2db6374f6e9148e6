//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use luterm::TextAlign;
use serde::{Deserialize, Serialize};

use crate::{CellContent, Value};

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl From<Align> for TextAlign {
    fn from(align: Align) -> Self {
        match align {
            Align::Start => TextAlign::Left,
            Align::Center => TextAlign::Center,
            Align::End => TextAlign::Right,
        }
    }
}

/// Column width hint. Only the painter looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in terminal columns.
    Fixed(u16),
    /// Share of the space left after fixed columns, by weight.
    Flex(u16),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

/// Custom cell rendering: `(raw value, row, display index) -> content`.
///
/// The raw value is [`Value::Null`] when the column has no field or the row
/// lacks it.
pub type Formatter<R> = Arc<dyn Fn(&Value, &R, usize) -> CellContent + Send + Sync>;

/// A table column definition.
///
/// ```
/// use lutable::{Align, Badge, BadgeVariant, CellContent, Column, Row};
///
/// let columns: Vec<Column<Row>> = vec![
///     Column::new("name", "Name").field("name").sortable(),
///     Column::new("age", "Age").field("age").sortable().align(Align::End).fixed(6),
///     Column::new("status", "Status").field("status").format(|value, _row: &Row, _index| {
///         CellContent::Badge(Badge::new(value.to_string(), BadgeVariant::Success))
///     }),
/// ];
/// assert!(columns[1].sortable);
/// ```
pub struct Column<R> {
    /// Unique identifier for this column within its table.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Row field the raw value is read from.
    pub field: Option<String>,
    pub sortable: bool,
    pub align: Align,
    pub width: Option<ColumnWidth>,
    pub formatter: Option<Formatter<R>>,
}

impl<R> Column<R> {
    /// Create a new column with the given key and title.
    ///
    /// The column has no data field until [`field`](Self::field) is called.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            field: None,
            sortable: false,
            align: Align::Start,
            width: None,
            formatter: None,
        }
    }

    /// Read raw values from this row field.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Make the column respond to header clicks.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = Some(ColumnWidth::Fixed(width));
        self
    }

    /// Set a flex width for this column.
    pub fn flex(mut self, weight: u16) -> Self {
        self.width = Some(ColumnWidth::Flex(weight));
        self
    }

    /// Render cells through `f` instead of showing the raw value.
    pub fn format<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &R, usize) -> CellContent + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(f));
        self
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            field: self.field.clone(),
            sortable: self.sortable,
            align: self.align,
            width: self.width,
            formatter: self.formatter.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("field", &self.field)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
