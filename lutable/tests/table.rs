use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lutable::{
    Badge, BadgeVariant, Body, CellContent, Column, Record, Row, RowKey, SortIndicator, SortState,
    Table, TableConfig, TableError, TableOptions, Value, render_cell,
};

fn people() -> Vec<Row> {
    vec![
        Row::new().set("name", "Zed").set("age", 30),
        Row::new().set("name", "Ann").set("age", 25),
        Row::new().set("name", "Mid").set("age", 25),
    ]
}

fn people_table() -> Table<Row> {
    Table::new(vec![
        Column::new("name", "Name").field("name"),
        Column::new("age", "Age").field("age").sortable(),
    ])
    .unwrap()
}

fn displayed_names(table: &Table<Row>, rows: &[Row]) -> Vec<String> {
    table
        .displayed(rows)
        .iter()
        .map(|r| r.get("name").unwrap().to_string())
        .collect()
}

#[test]
fn test_scenario_sort_age_ascending() {
    let rows = people();
    let mut table = people_table();
    table.on_header_click("age");
    assert_eq!(displayed_names(&table, &rows), ["Ann", "Mid", "Zed"]);
}

#[test]
fn test_scenario_sort_age_descending() {
    let rows = people();
    let mut table = people_table();
    table.on_header_click("age");
    table.on_header_click("age");
    assert_eq!(displayed_names(&table, &rows), ["Zed", "Ann", "Mid"]);
}

#[test]
fn test_scenario_third_click_restores_input_order() {
    let rows = people();
    let mut table = people_table();
    for _ in 0..3 {
        table.on_header_click("age");
    }
    assert_eq!(*table.sort_state(), SortState::Unsorted);
    assert_eq!(displayed_names(&table, &rows), ["Zed", "Ann", "Mid"]);
}

#[test]
fn test_scenario_null_scores_last() {
    let rows = vec![
        Row::new().set("name", "A").set("score", Value::Null),
        Row::new().set("name", "B").set("score", 5),
        Row::new().set("name", "C").set("score", Value::Null),
    ];
    let mut table = Table::new(vec![
        Column::new("name", "Name").field("name"),
        Column::new("score", "Score").field("score").sortable(),
    ])
    .unwrap();

    table.on_header_click("score");
    assert_eq!(displayed_names(&table, &rows), ["B", "A", "C"]);
    table.on_header_click("score");
    assert_eq!(displayed_names(&table, &rows), ["B", "A", "C"]);
}

#[test]
fn test_scenario_empty_rows_show_placeholder() {
    let table = people_table().with_options(TableOptions::new().empty_text("No data"));
    let view = table.render(&[]);

    assert_eq!(
        view.body,
        Body::Empty {
            message: "No data".into(),
            span: 2
        }
    );
    assert!(view.rows().is_empty());
    assert!(view.is_empty());
}

#[test]
fn test_sorting_column_without_field_keeps_order() {
    let rows = people();
    let mut table = Table::new(vec![
        Column::new("name", "Name").field("name"),
        Column::new("actions", "Actions")
            .sortable()
            .format(|_, _: &Row, _| CellContent::text("edit")),
    ])
    .unwrap();

    table.on_header_click("actions");
    assert_eq!(*table.sort_state(), SortState::Ascending("actions".into()));
    assert_eq!(displayed_names(&table, &rows), ["Zed", "Ann", "Mid"]);
}

#[test]
fn test_duplicate_column_keys_rejected() {
    let result: Result<Table<Row>, _> = Table::new(vec![
        Column::new("name", "Name"),
        Column::new("name", "Other"),
    ]);
    assert_eq!(result.unwrap_err(), TableError::DuplicateColumn("name".into()));
}

#[test]
fn test_render_header_indicators() {
    let mut table = Table::<Row>::new(vec![
        Column::new("name", "Name").field("name").sortable(),
        Column::new("age", "Age").field("age").sortable(),
        Column::new("note", "Note"),
    ])
    .unwrap();
    table.on_header_click("age");
    table.on_header_click("age");

    let view = table.render(&people());
    let sorts: Vec<_> = view.header.iter().map(|h| h.sort).collect();
    assert_eq!(
        sorts,
        [
            SortIndicator::Idle,
            SortIndicator::Descending,
            SortIndicator::Unsortable
        ]
    );
}

#[test]
fn test_render_rows_in_display_order_with_stripes() {
    let rows = people();
    let mut table = people_table();
    table.on_header_click("age");

    let view = table.render(&rows);
    let rendered: Vec<_> = view
        .rows()
        .iter()
        .map(|r| (r.index, r.striped, r.cells[0].content.as_plain().to_string()))
        .collect();
    assert_eq!(
        rendered,
        [
            (0, false, "Ann".to_string()),
            (1, true, "Mid".to_string()),
            (2, false, "Zed".to_string()),
        ]
    );
    assert_eq!(view.rows()[0].cells[1].content, CellContent::text("25"));
}

#[test]
fn test_stripes_disabled() {
    let table = people_table().with_options(TableOptions::new().striped(false));
    let view = table.render(&people());
    assert!(view.rows().iter().all(|r| !r.striped));
}

#[test]
fn test_row_key_field_falls_back_to_index() {
    let rows = vec![
        Row::new().set("id", "u-1").set("name", "Has id"),
        Row::new().set("name", "No id"),
        Row::new().set("id", Value::Null).set("name", "Null id"),
    ];
    let view = people_table().render(&rows);
    let keys: Vec<_> = view.rows().iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["u-1", "1", "2"]);
}

#[test]
fn test_row_key_function() {
    let table = people_table().with_options(
        TableOptions::new().row_key(RowKey::func(|row: &Row| {
            format!("person-{}", row.get("name").unwrap())
        })),
    );
    let view = table.render(&people());
    assert_eq!(view.rows()[1].key, "person-Ann");
}

#[test]
fn test_formatter_receives_value_row_and_display_index() {
    let rows = people();
    let mut table = Table::new(vec![
        Column::new("age", "Age").field("age").sortable(),
        Column::new("label", "Label").field("name").format(|value, row: &Row, index| {
            CellContent::text(format!("{index}:{value}:{}", row.get("age").unwrap()))
        }),
    ])
    .unwrap();
    table.on_header_click("age");

    let view = table.render(&rows);
    let labels: Vec<_> = view
        .rows()
        .iter()
        .map(|r| r.cells[1].content.as_plain().to_string())
        .collect();
    assert_eq!(labels, ["0:Ann:25", "1:Mid:25", "2:Zed:30"]);
}

#[test]
fn test_formatter_can_return_badge() {
    let column = Column::new("status", "Status")
        .field("status")
        .format(|value, _: &Row, _| {
            let variant = if value.as_str() == Some("active") {
                BadgeVariant::Success
            } else {
                BadgeVariant::Warning
            };
            CellContent::from(Badge::new(value.to_string(), variant))
        });
    let row = Row::new().set("status", "active");

    assert_eq!(
        render_cell(&column, &row, 0),
        CellContent::Badge(Badge::new("active", BadgeVariant::Success))
    );
}

#[test]
fn test_cell_without_field_or_formatter_is_empty() {
    let column: Column<Row> = Column::new("blank", "Blank");
    assert_eq!(render_cell(&column, &people()[0], 0), CellContent::Empty);

    let missing: Column<Row> = Column::new("x", "X").field("nope");
    assert_eq!(render_cell(&missing, &people()[0], 0), CellContent::Empty);
}

#[test]
fn test_renderer_runs_on_every_render() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let table = Table::new(vec![Column::new("name", "Name").field("name").format(
        move |value, _: &Row, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            CellContent::from(value)
        },
    )])
    .unwrap();

    let rows = people();
    table.render(&rows);
    table.render(&rows);
    assert_eq!(calls.load(Ordering::SeqCst), 6);
}

#[test]
fn test_loading_flag_keeps_rows() {
    let table = people_table().with_options(TableOptions::new().loading(true));
    let view = table.render(&people());
    assert!(view.loading);
    assert_eq!(view.rows().len(), 3);
}

#[test]
fn test_config_defaults_and_unknown_keys() {
    let config: TableConfig =
        serde_json::from_str(r#"{"emptyText": "ignored", "loading": true}"#).unwrap();
    assert!(config.loading);
    assert!(config.striped);
    assert!(config.hoverable);
    assert!(!config.bordered);
    assert_eq!(config.empty_text, "No data");
    assert_eq!(config.row_key, "id");

    let options: TableOptions<Row> = config.into();
    assert!(options.loading);
}

#[test]
fn test_rows_deserialize_from_json() {
    let rows: Vec<Row> =
        serde_json::from_str(r#"[{"name": "Ann", "age": 25, "score": null, "ok": true, "w": 1.5}]"#)
            .unwrap();
    let row = &rows[0];
    assert_eq!(row.field("age"), Some(Value::Int(25)));
    assert_eq!(row.field("score"), Some(Value::Null));
    assert_eq!(row.field("ok"), Some(Value::Bool(true)));
    assert_eq!(row.field("w"), Some(Value::Float(1.5)));
    assert_eq!(row.field("missing"), None);
}

struct User {
    name: &'static str,
    age: Option<u32>,
}

impl Record for User {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(self.name.into()),
            "age" => Some(self.age.into()),
            _ => None,
        }
    }
}

#[test]
fn test_typed_records() {
    let users = vec![
        User { name: "b", age: None },
        User { name: "a", age: Some(40) },
        User { name: "c", age: Some(20) },
    ];
    let mut table = Table::new(vec![
        Column::new("name", "Name").field("name"),
        Column::new("age", "Age").field("age").sortable(),
    ])
    .unwrap();
    table.on_header_click("age");

    let order: Vec<_> = table.displayed(&users).iter().map(|u| u.name).collect();
    assert_eq!(order, ["c", "a", "b"]);
}
