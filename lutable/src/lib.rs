//! Sortable data table for terminal UIs.
//!
//! The table is split into a small pipeline:
//!
//! - [`ColumnSet`] holds the ordered column descriptors of one table instance.
//! - [`SortState`] is a three-state machine driven by header clicks.
//! - [`sort_indices`] derives a stable, display-ordered view of the rows.
//! - [`render_cell`] turns a `(column, row)` pair into [`CellContent`].
//!
//! [`Table`] ties these together and produces a [`TableView`], which
//! [`paint`] draws into a [`luterm::Buffer`].
//!
//! # Example
//!
//! ```
//! use lutable::{Column, Row, Table};
//!
//! let rows = vec![
//!     Row::new().set("name", "Zed").set("age", 30),
//!     Row::new().set("name", "Ann").set("age", 25),
//! ];
//! let mut table = Table::new(vec![
//!     Column::new("name", "Name").field("name"),
//!     Column::new("age", "Age").field("age").sortable(),
//! ])
//! .unwrap();
//!
//! table.on_header_click("age");
//! let names: Vec<_> = table
//!     .displayed(&rows)
//!     .iter()
//!     .map(|r| r.get("name").unwrap().to_string())
//!     .collect();
//! assert_eq!(names, ["Ann", "Zed"]);
//! ```

mod cell;
mod collate;
mod column;
mod engine;
mod error;
mod options;
mod paint;
mod record;
mod registry;
mod sort;
mod table;
mod theme;
mod value;
mod view;

pub use cell::{Badge, BadgeVariant, CellContent, render_cell};
pub use collate::compare_text;
pub use column::{Align, Column, ColumnWidth, Formatter};
pub use engine::{compare_values, sort_indices, sort_rows};
pub use error::TableError;
pub use options::{DEFAULT_EMPTY_TEXT, RowKey, TableConfig, TableOptions};
pub use paint::{TableLayout, paint};
pub use record::{Record, Row};
pub use registry::ColumnSet;
pub use sort::{SortDirection, SortState};
pub use table::Table;
pub use theme::{Palette, ThemeHandle, ThemeMode};
pub use value::Value;
pub use view::{Body, CellView, HeaderCell, RowView, SortIndicator, TableView};
