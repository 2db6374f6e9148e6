//! Demo rows and columns, built in or loaded from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use lutable::{Align, Badge, BadgeVariant, CellContent, Column, Row, TableConfig, Value};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid data file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Contents of a `--data` file. Both keys are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DataFile {
    pub options: TableConfig,
    pub rows: Vec<Row>,
}

pub fn load(path: &Path) -> Result<DataFile, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: DataFile = serde_json::from_str(&text).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("[data] loaded {} rows from {}", file.rows.len(), path.display());
    Ok(file)
}

/// Name, age, city and a status badge.
pub fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("name", "Name").field("name").sortable(),
        Column::new("age", "Age")
            .field("age")
            .sortable()
            .align(Align::Center)
            .fixed(9),
        Column::new("city", "City").field("city").sortable(),
        Column::new("status", "Status")
            .field("status")
            .fixed(12)
            .format(|value, _: &Row, _| status_badge(value)),
    ]
}

fn status_badge(value: &Value) -> CellContent {
    if value.is_null() {
        return CellContent::Empty;
    }
    let variant = match value.as_str() {
        Some("online") => BadgeVariant::Success,
        Some("away") => BadgeVariant::Warning,
        _ => BadgeVariant::Default,
    };
    Badge::new(value.to_string(), variant).into()
}

pub fn sample_rows() -> Vec<Row> {
    [
        ("1", "Zhang San", Some(28), "Beijing", "online"),
        ("2", "Li Si", Some(32), "Shanghai", "offline"),
        ("3", "Wang Wu", Some(25), "Shenzhen", "online"),
        ("4", "Émile", None, "Lyon", "away"),
        ("5", "ada", Some(36), "London", "offline"),
        ("6", "Bjørn", Some(25), "Oslo", "online"),
    ]
    .into_iter()
    .map(|(id, name, age, city, status)| {
        Row::new()
            .set("id", id)
            .set("name", name)
            .set("age", age)
            .set("city", city)
            .set("status", status)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use lutable::{Record, Table};

    use super::*;

    #[test]
    fn test_data_file_keys_are_optional() {
        let file: DataFile = serde_json::from_str("{}").unwrap();
        assert!(file.rows.is_empty());
        assert_eq!(file.options, TableConfig::default());

        let file: DataFile =
            serde_json::from_str(r#"{"options": {"bordered": true}, "rows": [{"name": "x"}]}"#)
                .unwrap();
        assert!(file.options.bordered);
        assert_eq!(file.rows[0].field("name"), Some(Value::from("x")));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load(Path::new("/nonexistent/rows.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/rows.json"));
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(
            status_badge(&Value::from("online")),
            CellContent::Badge(Badge::new("online", BadgeVariant::Success))
        );
        assert_eq!(status_badge(&Value::Null), CellContent::Empty);
    }

    #[test]
    fn test_sample_sorts_by_age_with_missing_last() {
        let rows = sample_rows();
        let mut table = Table::new(columns()).unwrap();
        table.on_header_click("age");

        let ids: Vec<_> = table
            .displayed(&rows)
            .iter()
            .map(|r| r.get("id").unwrap().to_string())
            .collect();
        assert_eq!(ids, ["3", "6", "1", "2", "5", "4"]);
    }
}
