//! Loading rows and grid configuration from JSON files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use datagrid::{ColumnDescriptor, FieldError, GridConfig, Value};
use log::info;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::CliError;

/// One row of the input: a JSON object.
pub type JsonRow = serde_json::Map<String, serde_json::Value>;

/// Contents of a `--config` file.
///
/// Grid options sit at the top level next to optional column lists, which
/// the matching command line flags override.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GridFile {
    #[serde(flatten)]
    pub config: GridConfig,
    pub columns: Vec<String>,
    pub searchable: Vec<String>,
    pub hidden: Vec<String>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let file = File::open(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| CliError::json(path, e))
}

/// Load the rows file.
pub fn load_rows(path: &Path) -> Result<Vec<JsonRow>, CliError> {
    let value: serde_json::Value = read_json(path)?;
    let serde_json::Value::Array(items) = value else {
        return Err(CliError::InvalidRows(format!(
            "{} does not hold a JSON array",
            path.display()
        )));
    };

    let rows = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            serde_json::Value::Object(row) => Ok(row),
            _ => Err(CliError::InvalidRows(format!("item {} is not an object", i))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the configuration file, or defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<GridFile, CliError> {
    match path {
        Some(path) => {
            let file: GridFile = read_json(path)?;
            info!("Loaded grid configuration from {}", path.display());
            Ok(file)
        }
        None => Ok(GridFile::default()),
    }
}

/// Keys of the first row, in document order.
pub fn infer_columns(rows: &[JsonRow]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// A sortable column reading the object field of the same key.
pub fn field_column(key: &str) -> ColumnDescriptor<JsonRow> {
    let field = key.to_string();
    ColumnDescriptor::try_new(key, move |row: &JsonRow| {
        row.get(&field)
            .cloned()
            .map(Value::from_json)
            .ok_or_else(|| FieldError::missing(&field))
    })
    .sortable()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(value: serde_json::Value) -> JsonRow {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_field_column_reads_typed_values() {
        let column = field_column("price");
        let r = row(serde_json::json!({ "price": 100, "name": "Basic" }));
        assert_eq!(column.read(&r), Ok(Value::Long(100)));
        assert!(column.is_sortable());
    }

    #[test]
    fn test_field_column_missing_field() {
        let column = field_column("price");
        let r = row(serde_json::json!({ "name": "Basic" }));
        assert_eq!(column.read(&r), Err(FieldError::missing("price")));
        assert_eq!(column.read(&r).unwrap_err().field(), "price");
    }

    #[test]
    fn test_infer_columns_from_first_row() {
        let rows = vec![row(serde_json::json!({ "id": 1, "name": "a" }))];
        let mut keys = infer_columns(&rows);
        keys.sort();
        assert_eq!(keys, vec!["id", "name"]);
        assert!(infer_columns(&[]).is_empty());
    }

    #[test]
    fn test_grid_file_flattens_config() {
        let file: GridFile = serde_json::from_str(
            r#"{ "page_size": 3, "searchable": ["name"], "enable_search": true }"#,
        )
        .unwrap();
        assert_eq!(file.config.page_size, 3);
        assert_eq!(file.searchable, vec!["name"]);
        assert!(file.columns.is_empty());
    }
}
