//! Cell content and the cell renderer.

use serde::{Deserialize, Serialize};

use crate::{Column, Record, Value};

/// What a single cell displays.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellContent {
    /// Nothing at all.
    #[default]
    Empty,
    Text(String),
    /// A small status label.
    Badge(Badge),
}

impl CellContent {
    pub fn text(s: impl Into<String>) -> Self {
        CellContent::Text(s.into())
    }

    /// The plain-text form, as shown without colors.
    pub fn as_plain(&self) -> &str {
        match self {
            CellContent::Empty => "",
            CellContent::Text(s) => s,
            CellContent::Badge(badge) => &badge.label,
        }
    }
}

impl From<&Value> for CellContent {
    fn from(value: &Value) -> Self {
        if value.is_null() {
            CellContent::Empty
        } else {
            CellContent::Text(value.to_string())
        }
    }
}

impl From<String> for CellContent {
    fn from(s: String) -> Self {
        CellContent::Text(s)
    }
}

impl From<&str> for CellContent {
    fn from(s: &str) -> Self {
        CellContent::Text(s.to_string())
    }
}

impl From<Badge> for CellContent {
    fn from(badge: Badge) -> Self {
        CellContent::Badge(badge)
    }
}

/// Color role of a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

/// A status label rendered inside a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }
}

/// Produce the content of one cell.
///
/// `display_index` is the row's position in the displayed (sorted) sequence.
/// A formatter's result is used verbatim; panics inside it are not caught.
pub fn render_cell<R: Record>(column: &Column<R>, row: &R, display_index: usize) -> CellContent {
    let value = column
        .field
        .as_deref()
        .and_then(|field| row.field(field))
        .unwrap_or(Value::Null);

    match &column.formatter {
        Some(format) => format(&value, row, display_index),
        None => CellContent::from(&value),
    }
}
