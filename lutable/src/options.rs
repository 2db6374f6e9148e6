//! Table presentation options.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Record;

/// Placeholder shown when there are no rows.
pub const DEFAULT_EMPTY_TEXT: &str = "No data";

/// How each displayed row gets its identity key.
///
/// Keys are used for stable UI identity across renders, never for sorting.
pub enum RowKey<R> {
    /// Read this field; falls back to the display index when absent or null.
    Field(String),
    Func(Arc<dyn Fn(&R) -> String + Send + Sync>),
}

impl<R: Record> RowKey<R> {
    pub fn func(f: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        RowKey::Func(Arc::new(f))
    }

    /// Identity of `row` shown at `display_index`.
    pub fn key_for(&self, row: &R, display_index: usize) -> String {
        match self {
            RowKey::Field(field) => row
                .field(field)
                .filter(|v| !v.is_null())
                .map(|v| v.to_string())
                .unwrap_or_else(|| display_index.to_string()),
            RowKey::Func(f) => f(row),
        }
    }
}

impl<R> Default for RowKey<R> {
    fn default() -> Self {
        RowKey::Field("id".to_string())
    }
}

impl<R> Clone for RowKey<R> {
    fn clone(&self) -> Self {
        match self {
            RowKey::Field(field) => RowKey::Field(field.clone()),
            RowKey::Func(f) => RowKey::Func(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for RowKey<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Field(field) => f.debug_tuple("Field").field(field).finish(),
            RowKey::Func(_) => f.write_str("Func(<fn>)"),
        }
    }
}

/// Typed presentation options for a [`Table`](crate::Table).
pub struct TableOptions<R> {
    /// Alternate row background.
    pub striped: bool,
    /// Column separators and row rules.
    pub bordered: bool,
    /// Highlight the row under the pointer.
    pub hoverable: bool,
    /// Show the loading overlay above the (dimmed) rows.
    pub loading: bool,
    /// Placeholder when there are no rows.
    pub empty_text: String,
    pub row_key: RowKey<R>,
}

impl<R> Default for TableOptions<R> {
    fn default() -> Self {
        Self {
            striped: true,
            bordered: false,
            hoverable: true,
            loading: false,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            row_key: RowKey::default(),
        }
    }
}

impl<R> Clone for TableOptions<R> {
    fn clone(&self) -> Self {
        Self {
            striped: self.striped,
            bordered: self.bordered,
            hoverable: self.hoverable,
            loading: self.loading,
            empty_text: self.empty_text.clone(),
            row_key: self.row_key.clone(),
        }
    }
}

impl<R> fmt::Debug for TableOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("striped", &self.striped)
            .field("bordered", &self.bordered)
            .field("hoverable", &self.hoverable)
            .field("loading", &self.loading)
            .field("empty_text", &self.empty_text)
            .field("row_key", &self.row_key)
            .finish()
    }
}

impl<R> TableOptions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn row_key(mut self, row_key: RowKey<R>) -> Self {
        self.row_key = row_key;
        self
    }
}

/// Serializable form of [`TableOptions`], for loading from config files.
///
/// Missing keys take their defaults and unknown keys are ignored.
///
/// ```
/// use lutable::{Row, TableConfig, TableOptions};
///
/// let config: TableConfig = serde_json::from_str(r#"{"bordered": true, "theme": "x"}"#).unwrap();
/// let options: TableOptions<Row> = config.into();
/// assert!(options.bordered);
/// assert!(options.striped);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub striped: bool,
    pub bordered: bool,
    pub hoverable: bool,
    pub loading: bool,
    pub empty_text: String,
    /// Field used for row identity.
    pub row_key: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            striped: true,
            bordered: false,
            hoverable: true,
            loading: false,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            row_key: "id".to_string(),
        }
    }
}

impl<R> From<TableConfig> for TableOptions<R> {
    fn from(config: TableConfig) -> Self {
        Self {
            striped: config.striped,
            bordered: config.bordered,
            hoverable: config.hoverable,
            loading: config.loading,
            empty_text: config.empty_text,
            row_key: RowKey::Field(config.row_key),
        }
    }
}
