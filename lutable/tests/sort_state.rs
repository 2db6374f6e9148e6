use lutable::{Column, Row, SortDirection, SortState, Table};

fn table() -> Table<Row> {
    Table::new(vec![
        Column::new("name", "Name").field("name").sortable(),
        Column::new("age", "Age").field("age").sortable(),
        Column::new("note", "Note").field("note"),
    ])
    .unwrap()
}

#[test]
fn test_initial_state_is_unsorted() {
    let table = table();
    assert_eq!(*table.sort_state(), SortState::Unsorted);
    assert_eq!(table.sort_state().active_key(), None);
    assert_eq!(table.sort_state().direction(), SortDirection::None);
}

#[test]
fn test_click_cycles_through_three_states() {
    let mut table = table();

    assert!(table.on_header_click("age"));
    assert_eq!(*table.sort_state(), SortState::Ascending("age".into()));

    assert!(table.on_header_click("age"));
    assert_eq!(*table.sort_state(), SortState::Descending("age".into()));

    assert!(table.on_header_click("age"));
    assert_eq!(*table.sort_state(), SortState::Unsorted);

    assert!(table.on_header_click("age"));
    assert_eq!(*table.sort_state(), SortState::Ascending("age".into()));
}

#[test]
fn test_switching_column_restarts_ascending() {
    let mut table = table();
    table.on_header_click("name");
    table.on_header_click("name");
    assert_eq!(*table.sort_state(), SortState::Descending("name".into()));

    table.on_header_click("age");
    assert_eq!(*table.sort_state(), SortState::Ascending("age".into()));

    table.on_header_click("name");
    assert_eq!(*table.sort_state(), SortState::Ascending("name".into()));
}

#[test]
fn test_unsortable_click_never_changes_state() {
    let mut table = table();
    for _ in 0..5 {
        assert!(!table.on_header_click("note"));
    }
    assert_eq!(*table.sort_state(), SortState::Unsorted);

    table.on_header_click("age");
    for _ in 0..5 {
        assert!(!table.on_header_click("note"));
    }
    assert_eq!(*table.sort_state(), SortState::Ascending("age".into()));
}

#[test]
fn test_unknown_column_is_ignored() {
    let mut table = table();
    assert!(!table.on_header_click("missing"));
    assert_eq!(*table.sort_state(), SortState::Unsorted);
}

#[test]
fn test_click_by_position() {
    let mut table = table();
    assert!(table.on_header_click_at(1));
    assert_eq!(table.sort_state().active_key(), Some("age"));
    assert!(!table.on_header_click_at(2));
    assert!(!table.on_header_click_at(9));
}

#[test]
fn test_state_accessors() {
    let state = SortState::Descending("score".into());
    assert_eq!(state.active_key(), Some("score"));
    assert_eq!(state.direction(), SortDirection::Descending);
    assert!(state.is_sorted());
    assert_eq!(state.to_string(), "score descending");
}
