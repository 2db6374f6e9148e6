//! The table component: columns, options and sort state of one instance.

use crate::{
    Body, CellView, Column, ColumnSet, HeaderCell, Record, RowView, SortDirection,
    SortIndicator, SortState, TableError, TableOptions, TableView, render_cell, sort_indices,
};

/// A sortable table over rows of type `R`.
///
/// Each instance owns its sort state; rows are borrowed per render and never
/// modified.
pub struct Table<R> {
    columns: ColumnSet<R>,
    options: TableOptions<R>,
    sort: SortState,
}

impl<R> std::fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("sort", &self.sort)
            .finish()
    }
}

impl<R: Record> Table<R> {
    /// Create an unsorted table with default options.
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, TableError> {
        Ok(Self {
            columns: ColumnSet::new(columns)?,
            options: TableOptions::default(),
            sort: SortState::Unsorted,
        })
    }

    pub fn with_options(mut self, options: TableOptions<R>) -> Self {
        self.options = options;
        self
    }

    pub fn columns(&self) -> &ColumnSet<R> {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions<R> {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut TableOptions<R> {
        &mut self.options
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Handle a click on the header of column `key`.
    ///
    /// Unknown and non-sortable columns are ignored. Returns whether the sort
    /// state changed.
    pub fn on_header_click(&mut self, key: &str) -> bool {
        let Some(column) = self.columns.get(key) else {
            log::trace!("[table] header click on unknown column {key}");
            return false;
        };
        if !column.sortable {
            log::trace!("[table] header click on unsortable column {key}");
            return false;
        }

        let next = self.sort.next(key);
        log::debug!("[table] sort {} -> {}", self.sort, next);
        self.sort = next;
        true
    }

    /// Click the header at display position `index`.
    pub fn on_header_click_at(&mut self, index: usize) -> bool {
        match self.columns.at(index).map(|c| c.key.clone()) {
            Some(key) => self.on_header_click(&key),
            None => false,
        }
    }

    /// Field and direction the engine should sort by.
    fn sort_spec(&self) -> (Option<&str>, SortDirection) {
        let field = self
            .sort
            .active_key()
            .and_then(|key| self.columns.get(key))
            .and_then(|column| column.field.as_deref());
        (field, self.sort.direction())
    }

    /// Indices into `rows` in display order.
    pub fn display_order(&self, rows: &[R]) -> Vec<usize> {
        let (field, direction) = self.sort_spec();
        sort_indices(rows, field, direction)
    }

    /// `rows` in display order.
    pub fn displayed<'a>(&self, rows: &'a [R]) -> Vec<&'a R> {
        self.display_order(rows)
            .into_iter()
            .map(|i| &rows[i])
            .collect()
    }

    /// Sort `rows` and render every cell.
    pub fn render(&self, rows: &[R]) -> TableView {
        let header = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                title: column.title.clone(),
                align: column.align,
                width: column.width.unwrap_or_default(),
                sort: self.indicator_for(column),
            })
            .collect();

        let body = if rows.is_empty() {
            Body::Empty {
                message: self.options.empty_text.clone(),
                span: self.columns.len(),
            }
        } else {
            Body::Rows(
                self.displayed(rows)
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| self.render_row(row, index))
                    .collect(),
            )
        };

        TableView {
            header,
            body,
            striped: self.options.striped,
            bordered: self.options.bordered,
            hoverable: self.options.hoverable,
            loading: self.options.loading,
        }
    }

    fn render_row(&self, row: &R, index: usize) -> RowView {
        RowView {
            key: self.options.row_key.key_for(row, index),
            index,
            striped: self.options.striped && index % 2 == 1,
            cells: self
                .columns
                .iter()
                .map(|column| CellView {
                    column: column.key.clone(),
                    align: column.align,
                    content: render_cell(column, row, index),
                })
                .collect(),
        }
    }

    fn indicator_for(&self, column: &Column<R>) -> SortIndicator {
        if !column.sortable {
            return SortIndicator::Unsortable;
        }
        match &self.sort {
            SortState::Ascending(key) if *key == column.key => SortIndicator::Ascending,
            SortState::Descending(key) if *key == column.key => SortIndicator::Descending,
            _ => SortIndicator::Idle,
        }
    }
}
