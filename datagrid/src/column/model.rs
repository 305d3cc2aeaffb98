//! Column model: ordered columns, key lookup and the visibility set.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::error::GridError;

use super::descriptor::ColumnDescriptor;

/// One entry of a column visibility menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    /// Column key.
    pub key: String,
    /// Plain header label.
    pub label: String,
    /// Whether the column is currently shown.
    pub visible: bool,
    /// Whether the user may hide it.
    pub hideable: bool,
}

/// Normalized set of column descriptors.
///
/// Keeps the declared order, a key → position lookup, and the set of
/// currently visible keys. Columns that cannot hide are members of the
/// visible set from construction on and no toggle removes them.
#[derive(Debug)]
pub struct ColumnModel<R> {
    columns: Vec<ColumnDescriptor<R>>,
    positions: HashMap<String, usize>,
    visible: HashSet<String>,
}

impl<R> ColumnModel<R> {
    /// Build a model from descriptors and an initial hidden set.
    ///
    /// A column starts hidden when it is marked hidden-by-default or listed in
    /// `hidden`, unless it cannot hide. Unknown keys in `hidden` are ignored.
    pub fn new<S: AsRef<str>>(
        columns: Vec<ColumnDescriptor<R>>,
        hidden: &[S],
    ) -> Result<Self, GridError> {
        let mut positions = HashMap::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            if positions.insert(column.key().to_string(), i).is_some() {
                return Err(GridError::duplicate_column(column.key()));
            }
        }

        let hidden: HashSet<&str> = hidden.iter().map(AsRef::as_ref).collect();
        let visible = columns
            .iter()
            .filter(|c| !c.is_hideable() || !(c.is_default_hidden() || hidden.contains(c.key())))
            .map(|c| c.key().to_string())
            .collect();

        Ok(Self {
            columns,
            positions,
            visible,
        })
    }

    /// All columns in declared order.
    pub fn columns(&self) -> &[ColumnDescriptor<R>] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column by key.
    pub fn get(&self, key: &str) -> Option<&ColumnDescriptor<R>> {
        self.positions.get(key).map(|&i| &self.columns[i])
    }

    /// Check if a key names a column.
    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Check if a column is currently visible.
    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.contains(key)
    }

    /// Flip a column's visibility.
    ///
    /// Unknown keys and columns that cannot hide are left alone. Returns
    /// whether anything changed.
    pub fn toggle_visibility(&mut self, key: &str) -> bool {
        if !self.get(key).is_some_and(|c| c.is_hideable()) {
            return false;
        }
        if !self.visible.remove(key) {
            self.visible.insert(key.to_string());
        }
        true
    }

    /// Visible columns in declared order.
    ///
    /// The order never depends on the toggle history.
    pub fn visible_columns(&self) -> Vec<&ColumnDescriptor<R>> {
        self.columns
            .iter()
            .filter(|c| self.visible.contains(c.key()))
            .collect()
    }

    /// Keys of the visible columns in declared order.
    pub fn visible_keys(&self) -> Vec<String> {
        self.visible_columns()
            .into_iter()
            .map(|c| c.key().to_string())
            .collect()
    }

    /// Entries for a column visibility menu, in declared order.
    pub fn visibility_entries(&self) -> Vec<ColumnVisibility> {
        self.columns
            .iter()
            .map(|c| ColumnVisibility {
                key: c.key().to_string(),
                label: c.label(),
                visible: self.visible.contains(c.key()),
                hideable: c.is_hideable(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Driver {
        name: String,
        phone: String,
    }

    fn columns() -> Vec<ColumnDescriptor<Driver>> {
        vec![
            ColumnDescriptor::new("name", |d: &Driver| d.name.clone()),
            ColumnDescriptor::new("phone", |d: &Driver| d.phone.clone()).hidden_by_default(),
            ColumnDescriptor::display("actions").disable_hiding(),
        ]
    }

    #[test]
    fn test_initial_visibility_skips_default_hidden() {
        let model = ColumnModel::new(columns(), &[] as &[&str]).unwrap();
        assert_eq!(model.visible_keys(), vec!["name", "actions"]);
    }

    #[test]
    fn test_hidden_list_cannot_hide_pinned_column() {
        let model = ColumnModel::new(columns(), &["name", "actions"]).unwrap();
        assert_eq!(model.visible_keys(), vec!["actions"]);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let mut cols = columns();
        cols.push(ColumnDescriptor::new("name", |d: &Driver| d.name.clone()));
        let err = ColumnModel::new(cols, &[] as &[&str]).unwrap_err();
        assert_eq!(err, GridError::duplicate_column("name"));
    }

    #[test]
    fn test_toggle_restores_declared_order() {
        let mut model = ColumnModel::new(columns(), &[] as &[&str]).unwrap();
        assert!(model.toggle_visibility("name"));
        assert!(model.toggle_visibility("phone"));
        assert!(model.toggle_visibility("name"));
        assert_eq!(model.visible_keys(), vec!["name", "phone", "actions"]);
    }

    #[test]
    fn test_toggle_ignores_unknown_and_pinned() {
        let mut model = ColumnModel::new(columns(), &[] as &[&str]).unwrap();
        assert!(!model.toggle_visibility("missing"));
        assert!(!model.toggle_visibility("actions"));
        assert!(model.is_visible("actions"));
    }

    #[test]
    fn test_visibility_entries() {
        let model = ColumnModel::new(columns(), &[] as &[&str]).unwrap();
        let entries = model.visibility_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].key, "phone");
        assert!(!entries[1].visible);
        assert!(!entries[2].hideable);
    }
}
