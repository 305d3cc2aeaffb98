//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Filter, sort and page a JSON array of objects as a table.
#[derive(Debug, Parser)]
#[command(name = "datagrid", version, about)]
pub struct Args {
    /// JSON file holding an array of objects
    #[arg(long, env = "DATAGRID_ROWS")]
    pub rows: PathBuf,

    /// JSON grid configuration
    #[arg(long, env = "DATAGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Columns to show, in order (default: keys of the first row)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Columns the query searches (default: all columns)
    #[arg(long, value_delimiter = ',')]
    pub search: Vec<String>,

    /// Search query
    #[arg(long, short)]
    pub query: Option<String>,

    /// Sort column, optionally suffixed with `:desc`
    #[arg(long, short)]
    pub sort: Option<String>,

    /// 1-based page to show
    #[arg(long, short, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides the configuration)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Columns to hide
    #[arg(long, value_delimiter = ',')]
    pub hide: Vec<String>,

    /// Field used as the row key
    #[arg(long)]
    pub key: Option<String>,

    /// Show the loading placeholder instead of rows
    #[arg(long)]
    pub loading: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Log level chosen by `-v`.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Sort column and whether it is descending.
    pub fn sort_spec(&self) -> Option<(&str, bool)> {
        let sort = self.sort.as_deref()?;
        Some(match sort.rsplit_once(':') {
            Some((key, dir)) if dir.eq_ignore_ascii_case("desc") => (key, true),
            Some((key, dir)) if dir.eq_ignore_ascii_case("asc") => (key, false),
            _ => (sort, false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_suffix() {
        let args = Args::parse_from(["datagrid", "--rows", "r.json", "--sort", "price:desc"]);
        assert_eq!(args.sort_spec(), Some(("price", true)));

        let args = Args::parse_from(["datagrid", "--rows", "r.json", "--sort", "name"]);
        assert_eq!(args.sort_spec(), Some(("name", false)));
    }

    #[test]
    fn test_list_flags_split_on_commas() {
        let args = Args::parse_from([
            "datagrid", "--rows", "r.json", "--columns", "a,b,c", "--hide", "b",
        ]);
        assert_eq!(args.columns, vec!["a", "b", "c"]);
        assert_eq!(args.hide, vec!["b"]);
        assert_eq!(args.page, 1);
    }

    #[test]
    fn test_verbosity_levels() {
        let args = Args::parse_from(["datagrid", "--rows", "r.json", "-vv"]);
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }
}
