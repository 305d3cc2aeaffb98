use datagrid::{ColumnDescriptor, DataGrid, GridConfig, GridError, SortSpec};

#[derive(Debug)]
struct Item {
    index: usize,
    name: String,
}

fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|index| Item {
            index,
            name: format!("item {:02}", index),
        })
        .collect()
}

fn grid(n: usize, config: GridConfig) -> DataGrid<Item> {
    DataGrid::builder(vec![
        ColumnDescriptor::new("name", |i: &Item| i.name.clone()),
        ColumnDescriptor::new("index", |i: &Item| i.index as i64).sortable(),
    ])
    .searchable(&["name"])
    .config(config)
    .rows(items(n))
    .build()
    .unwrap()
}

fn page(grid: &DataGrid<Item>) -> Vec<usize> {
    grid.view().rows().map(|i| i.index).collect()
}

fn assert_in_range(grid: &DataGrid<Item>) {
    let p = grid.pagination();
    assert!(p.page_index < p.page_count.max(1), "{:?}", p);
}

#[test]
fn test_scenario_last_partial_page() {
    let grid = grid(25, GridConfig::new().with_page_size(10));
    assert!(grid.set_page_index(2));
    assert_eq!(page(&grid), vec![20, 21, 22, 23, 24]);
    let p = grid.pagination();
    assert_eq!(p.page_count, 3);
    assert_eq!((p.first_row, p.last_row), (21, 25));
    assert!(!p.has_next());
}

#[test]
fn test_default_page_size() {
    let grid = grid(25, GridConfig::default());
    assert_eq!(grid.pagination().page_size, 10);
    assert_eq!(grid.view().page_len(), 10);
}

#[test]
fn test_out_of_range_index_clamped() {
    let grid = grid(25, GridConfig::default());
    grid.set_page_index(99);
    assert_eq!(grid.pagination().page_index, 2);
    assert!(!grid.set_page_index(7));
}

#[test]
fn test_pages_cover_every_row_once() {
    let grid = grid(47, GridConfig::new().with_page_size(6));
    grid.set_query("1");
    grid.set_sort(Some(SortSpec::descending("index")));

    let expected: Vec<usize> = (0..47)
        .rev()
        .filter(|i| format!("item {:02}", i).contains('1'))
        .collect();

    let mut seen = Vec::new();
    for index in 0..grid.pagination().page_count {
        grid.set_page_index(index);
        seen.extend(page(&grid));
    }
    assert_eq!(seen, expected);
}

#[test]
fn test_query_shrink_clamps_page() {
    let grid = grid(25, GridConfig::default());
    grid.set_page_index(2);
    grid.set_query("item 0");
    let p = grid.pagination();
    assert_eq!(p.total_filtered, 10);
    assert_eq!(p.page_index, 0);
    assert_eq!(page(&grid).len(), 10);
}

#[test]
fn test_query_change_keeps_page_in_range() {
    let grid = grid(25, GridConfig::default());
    grid.set_page_index(1);
    grid.set_query("item");
    assert_eq!(grid.pagination().page_index, 1);
}

#[test]
fn test_row_replacement_clamps_page() {
    let grid = grid(25, GridConfig::default());
    grid.last_page();
    grid.set_rows(items(12));
    assert_eq!(grid.pagination().page_index, 1);
    assert_eq!(page(&grid), vec![10, 11]);
    grid.set_rows(Vec::<Item>::new());
    assert_eq!(grid.pagination().page_index, 0);
    assert!(grid.view().is_empty());
}

#[test]
fn test_page_size_change_resets_index() {
    let grid = grid(25, GridConfig::default());
    grid.set_page_index(2);
    assert_eq!(grid.set_page_size(5), Ok(true));
    let p = grid.pagination();
    assert_eq!((p.page_index, p.page_count), (0, 5));
}

#[test]
fn test_zero_page_size_rejected() {
    let grid = grid(25, GridConfig::default());
    assert_eq!(
        grid.set_page_size(0),
        Err(GridError::InvalidPageSize { size: 0 })
    );
    assert_eq!(grid.pagination().page_size, 10);

    let built = DataGrid::builder(vec![ColumnDescriptor::new("name", |i: &Item| i.name.clone())])
        .config(GridConfig::new().with_page_size(0))
        .build();
    assert_eq!(built.unwrap_err(), GridError::InvalidPageSize { size: 0 });
}

#[test]
fn test_navigation_helpers() {
    let grid = grid(25, GridConfig::default());
    assert!(!grid.previous_page());
    assert!(grid.next_page());
    assert!(grid.next_page());
    assert!(!grid.next_page());
    assert_eq!(grid.pagination().page_index, 2);
    assert!(grid.first_page());
    assert!(!grid.first_page());
    assert!(grid.last_page());
    assert!(grid.previous_page());
    assert_eq!(grid.pagination().page_index, 1);
}

#[test]
fn test_pagination_disabled_single_page() {
    let grid = grid(25, GridConfig::new().with_pagination(false));
    let p = grid.pagination();
    assert_eq!(p.page_count, 1);
    assert_eq!(grid.view().page_len(), 25);
    assert!(!grid.next_page());
    assert!(!grid.set_page_index(3));
}

#[test]
fn test_clamping_holds_across_mutations() {
    let grid = grid(33, GridConfig::new().with_page_size(4));
    let queries = ["", "item 1", "item 3", "zzz", "item", "2"];
    for (step, query) in queries.iter().enumerate() {
        grid.set_page_index(step * 3);
        assert_in_range(&grid);
        grid.set_query(*query);
        assert_in_range(&grid);
        grid.toggle_sort("index");
        assert_in_range(&grid);
        grid.set_page_size(step + 1).unwrap();
        assert_in_range(&grid);
        grid.last_page();
        assert_in_range(&grid);
    }
}

#[test]
fn test_summary_counts() {
    let grid = grid(25, GridConfig::default());
    grid.set_query("item 1");
    let p = grid.pagination();
    assert_eq!(p.total_filtered, 10);
    assert_eq!(p.total_rows, 25);
    assert_eq!(grid.view().pagination, p);
}

fn loading_grid(n: usize) -> DataGrid<Item> {
    DataGrid::builder(vec![ColumnDescriptor::new("name", |i: &Item| i.name.clone())])
        .config(GridConfig::new().with_page_size(10))
        .rows(items(n))
        .loading(true)
        .build()
        .unwrap()
}

#[test]
fn test_page_chosen_while_loading_applies_after() {
    let grid = loading_grid(25);
    assert!(grid.set_page_index(2));
    assert!(!grid.set_page_index(2));

    grid.set_loading(false);
    assert_eq!(grid.pagination().page_index, 2);
    assert_eq!(page(&grid), vec![20, 21, 22, 23, 24]);
}

#[test]
fn test_page_chosen_while_loading_is_clamped_after() {
    let grid = loading_grid(25);
    grid.set_page_index(99);
    grid.set_loading(false);
    assert_eq!(grid.pagination().page_index, 2);
    assert_in_range(&grid);
}

#[test]
fn test_navigation_while_loading_accumulates() {
    let grid = loading_grid(25);
    assert!(grid.next_page());
    assert!(grid.next_page());
    assert!(grid.previous_page());
    grid.set_loading(false);
    assert_eq!(grid.pagination().page_index, 1);

    grid.set_loading(true);
    assert!(grid.last_page());
    grid.set_loading(false);
    assert_eq!(grid.pagination().page_index, 2);

    grid.set_loading(true);
    assert!(grid.first_page());
    assert!(!grid.previous_page());
    grid.set_loading(false);
    assert_eq!(grid.pagination().page_index, 0);
}

#[test]
fn test_page_size_change_drops_page_chosen_while_loading() {
    let grid = loading_grid(25);
    grid.set_page_index(2);
    grid.set_page_size(5).unwrap();
    grid.set_loading(false);
    assert_eq!(grid.pagination().page_index, 0);
}
