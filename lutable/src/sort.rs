//! Single-column sort state machine.

use std::fmt;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    /// No column is sorted.
    #[default]
    None,
}

/// Which column is sorted, and how.
///
/// Clicking a header cycles one column through
/// `Unsorted -> Ascending -> Descending -> Unsorted`. Clicking a different
/// column always restarts at `Ascending`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending(String),
    Descending(String),
}

impl SortState {
    /// Key of the sorted column, if any.
    pub fn active_key(&self) -> Option<&str> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(key) | SortState::Descending(key) => Some(key),
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortState::Unsorted => SortDirection::None,
            SortState::Ascending(_) => SortDirection::Ascending,
            SortState::Descending(_) => SortDirection::Descending,
        }
    }

    pub fn is_sorted(&self) -> bool {
        !matches!(self, SortState::Unsorted)
    }

    /// The state after a click on column `key`.
    ///
    /// Callers are responsible for only passing sortable columns.
    pub fn next(&self, key: &str) -> SortState {
        match self {
            SortState::Ascending(active) if active == key => SortState::Descending(key.to_string()),
            SortState::Descending(active) if active == key => SortState::Unsorted,
            _ => SortState::Ascending(key.to_string()),
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortState::Unsorted => f.write_str("unsorted"),
            SortState::Ascending(key) => write!(f, "{key} ascending"),
            SortState::Descending(key) => write!(f, "{key} descending"),
        }
    }
}
