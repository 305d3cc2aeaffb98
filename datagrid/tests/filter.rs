use datagrid::{
    ColumnDescriptor, DataGrid, FieldError, GridConfig, SearchMode, Value, filter_indices,
};

#[derive(Debug, Clone)]
struct Subscription {
    restaurant: String,
    plan: String,
    amount: i64,
    active: bool,
    notes: Option<String>,
}

fn sub(restaurant: &str, plan: &str, amount: i64) -> Subscription {
    Subscription {
        restaurant: restaurant.into(),
        plan: plan.into(),
        amount,
        active: amount > 100,
        notes: None,
    }
}

fn rows() -> Vec<Subscription> {
    vec![
        sub("Ocean Breeze", "Premium", 500),
        sub("Urban Kitchen", "Basic", 50),
        sub("Blue Ocean Grill", "Standard", 121),
        sub("Harbor Café", "Premium", 100),
    ]
}

fn columns() -> Vec<ColumnDescriptor<Subscription>> {
    vec![
        ColumnDescriptor::new("restaurant", |s: &Subscription| s.restaurant.clone()),
        ColumnDescriptor::new("plan", |s: &Subscription| s.plan.clone()),
        ColumnDescriptor::new("amount", |s: &Subscription| s.amount).sortable(),
        ColumnDescriptor::new("active", |s: &Subscription| s.active),
        ColumnDescriptor::new("notes", |s: &Subscription| s.notes.clone()),
    ]
}

fn grid(searchable: &[&str]) -> DataGrid<Subscription> {
    DataGrid::builder(columns())
        .searchable(searchable)
        .rows(rows())
        .build()
        .unwrap()
}

fn restaurants(grid: &DataGrid<Subscription>) -> Vec<String> {
    grid.view().rows().map(|s| s.restaurant.clone()).collect()
}

#[test]
fn test_scenario_single_match() {
    let rows = vec![sub("Ocean Breeze", "Premium", 500), sub("Urban Kitchen", "Basic", 50)];
    let grid = DataGrid::builder(columns())
        .searchable(&["restaurant"])
        .rows(rows)
        .build()
        .unwrap();
    assert!(grid.set_query("ocean"));
    assert_eq!(restaurants(&grid), vec!["Ocean Breeze"]);
}

#[test]
fn test_matches_keep_original_order() {
    let grid = grid(&["restaurant"]);
    grid.set_query("OCEAN");
    assert_eq!(restaurants(&grid), vec!["Ocean Breeze", "Blue Ocean Grill"]);
}

#[test]
fn test_blank_query_is_identity() {
    let grid = grid(&["restaurant"]);
    for query in ["", "   ", "\t"] {
        grid.set_query(query);
        assert_eq!(grid.filtered_len(), 4);
    }
}

#[test]
fn test_non_searchable_column_never_matches() {
    let grid = grid(&["restaurant"]);
    grid.set_query("premium");
    assert!(grid.view().is_empty());
    assert_eq!(grid.filtered_len(), 0);
}

#[test]
fn test_numbers_and_booleans_match_canonical_string() {
    let grid = grid(&["amount", "active"]);
    grid.set_query("100");
    assert_eq!(restaurants(&grid), vec!["Harbor Café"]);
    grid.set_query("true");
    assert_eq!(restaurants(&grid), vec!["Ocean Breeze", "Blue Ocean Grill"]);
}

#[test]
fn test_query_not_trimmed_when_matching() {
    let grid = grid(&["restaurant"]);
    grid.set_query("n K");
    assert_eq!(restaurants(&grid), vec!["Urban Kitchen"]);
    grid.set_query(" ocean");
    assert_eq!(restaurants(&grid), vec!["Blue Ocean Grill"]);
}

#[test]
fn test_null_and_failed_fields_do_not_match() {
    let failing = ColumnDescriptor::try_new("owner", |s: &Subscription| {
        if s.amount > 100 {
            Err(FieldError::missing("owner"))
        } else {
            Ok(Value::from(s.plan.clone()))
        }
    });
    let mut cols = columns();
    cols.push(failing);
    let grid = DataGrid::builder(cols)
        .searchable(&["notes", "owner"])
        .rows(rows())
        .build()
        .unwrap();

    grid.set_query("premium");
    assert_eq!(restaurants(&grid), vec!["Harbor Café"]);
}

#[test]
fn test_filter_idempotent() {
    let rows = rows();
    let cols = columns();
    let searchable: Vec<_> = cols.iter().take(2).collect();

    let once = filter_indices(&rows, &searchable, "o", SearchMode::Substring);
    let kept: Vec<Subscription> = once.iter().map(|&i| rows[i].clone()).collect();
    let twice = filter_indices(&kept, &searchable, "o", SearchMode::Substring);

    assert_eq!(twice, (0..kept.len()).collect::<Vec<_>>());
}

#[test]
fn test_search_disabled_ignores_query() {
    let grid = DataGrid::builder(columns())
        .searchable(&["restaurant"])
        .config(GridConfig::new().with_search(false))
        .rows(rows())
        .build()
        .unwrap();
    assert!(!grid.set_query("ocean"));
    assert_eq!(grid.query(), "");
    assert_eq!(grid.filtered_len(), 4);
    assert!(!grid.view().search_enabled);
}

#[test]
fn test_unknown_searchable_key_ignored() {
    let grid = grid(&["owner", "restaurant"]);
    grid.set_query("kitchen");
    assert_eq!(restaurants(&grid), vec!["Urban Kitchen"]);
}

#[test]
fn test_fuzzy_mode() {
    let grid = DataGrid::builder(columns())
        .searchable(&["restaurant"])
        .config(GridConfig::new().with_search_mode(SearchMode::Fuzzy))
        .rows(rows())
        .build()
        .unwrap();
    grid.set_query("obz");
    assert_eq!(restaurants(&grid), vec!["Ocean Breeze"]);
    grid.set_query("ocean");
    assert_eq!(restaurants(&grid), vec!["Ocean Breeze", "Blue Ocean Grill"]);
}

#[test]
fn test_clear_query_restores_rows() {
    let grid = grid(&["restaurant"]);
    grid.set_query("ocean");
    assert_eq!(grid.filtered_len(), 2);
    assert!(grid.clear_query());
    assert_eq!(grid.filtered_len(), 4);
    assert!(!grid.clear_query());
}
