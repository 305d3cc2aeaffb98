//! Plain text rendering of a grid view.

use std::fmt::Write;

use datagrid::{GridBody, GridView};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = "  ";
const SKELETON: &str = "…";

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(text, &width)| pad(text, width))
        .collect();
    padded.join(SEPARATOR).trim_end().to_string()
}

/// Summary line under the table.
pub fn summary<R>(view: &GridView<R>) -> String {
    let p = &view.pagination;
    format!(
        "page {} of {} ({} results)",
        p.page_index + 1,
        p.page_count,
        p.total_filtered
    )
}

/// Render the header, body and summary as text.
pub fn render<R>(view: &GridView<R>) -> String {
    let headers: Vec<String> = view
        .columns
        .iter()
        .map(|c| match c.sort.indicator() {
            "" => c.label.clone(),
            indicator => format!("{} {}", c.label, indicator),
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in view.rendered_rows() {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.text.width());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(headers.iter().map(String::as_str), &widths));
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w.max(1))).collect();
    let _ = writeln!(out, "{}", rule.join(SEPARATOR));

    match &view.body {
        GridBody::Loading { skeleton_rows } => {
            for _ in 0..*skeleton_rows {
                let _ = writeln!(out, "{}", line(widths.iter().map(|_| SKELETON), &widths));
            }
            let _ = writeln!(out, "Loading…");
        }
        GridBody::Empty => {
            let _ = writeln!(out, "No results.");
        }
        GridBody::Rows(rows) => {
            for row in rows {
                let cells = row.cells.iter().map(|c| c.text.as_str());
                let _ = writeln!(out, "{}", line(cells, &widths));
            }
        }
    }

    let _ = write!(out, "{}", summary(view));
    out
}

#[cfg(test)]
mod tests {
    use datagrid::{ColumnDescriptor, DataGrid, GridConfig};

    use super::*;

    struct Plan {
        name: &'static str,
        price: i64,
    }

    fn grid(rows: Vec<Plan>) -> DataGrid<Plan> {
        DataGrid::builder(vec![
            ColumnDescriptor::new("name", |p: &Plan| p.name).header("Name"),
            ColumnDescriptor::new("price", |p: &Plan| p.price)
                .header("Price")
                .sortable(),
        ])
        .searchable(&["name"])
        .config(GridConfig::new().with_page_size(2))
        .rows(rows)
        .build()
        .unwrap()
    }

    fn plans() -> Vec<Plan> {
        vec![
            Plan { name: "Basic", price: 10 },
            Plan { name: "Pro", price: 30 },
            Plan { name: "Team", price: 20 },
        ]
    }

    #[test]
    fn test_render_pads_columns() {
        let text = render(&grid(plans()).view());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name   Price");
        assert_eq!(lines[1], "-----  -----");
        assert_eq!(lines[2], "Basic  10");
        assert_eq!(lines[3], "Pro    30");
        assert_eq!(lines[4], "page 1 of 2 (3 results)");
    }

    #[test]
    fn test_render_sort_indicator() {
        let grid = grid(plans());
        grid.toggle_sort("price");
        let text = render(&grid.view());
        assert!(text.lines().next().unwrap().contains("Price ▲"));
        assert!(text.contains("Basic  10"));
        assert!(text.contains("Team   20"));
    }

    #[test]
    fn test_render_no_results() {
        let grid = grid(plans());
        grid.set_query("zzz");
        let text = render(&grid.view());
        assert!(text.contains("No results."));
        assert!(text.ends_with("page 1 of 1 (0 results)"));
    }

    #[test]
    fn test_render_loading() {
        let grid = grid(plans());
        grid.set_loading(true);
        let text = render(&grid.view());
        assert_eq!(text.matches("…").count(), 2 * 2 + 1);
        assert!(text.contains("Loading…"));
    }
}
