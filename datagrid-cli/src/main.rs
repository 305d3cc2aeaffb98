mod args;
mod error;
mod source;
mod table;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use datagrid::DataGrid;
use log::{debug, error, warn};
use simplelog::{Config, SimpleLogger, WriteLogger};

use crate::args::Args;
use crate::error::CliError;
use crate::source::JsonRow;

fn init_logger(args: &Args) -> Result<(), CliError> {
    let level = args.log_level();
    let result = match &args.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| CliError::io(path, e))?;
            WriteLogger::init(level, Config::default(), file)
        }
        None => SimpleLogger::init(level, Config::default()),
    };
    if let Err(e) = result {
        eprintln!("Failed to initialize logger: {}", e);
    }
    Ok(())
}

fn build_grid(args: &Args) -> Result<DataGrid<JsonRow>, CliError> {
    let rows = source::load_rows(&args.rows)?;
    let file = source::load_config(args.config.as_deref())?;

    let mut config = file.config;
    if let Some(size) = args.page_size {
        config.page_size = size;
    }

    let keys = [&args.columns, &file.columns]
        .into_iter()
        .find(|keys| !keys.is_empty())
        .cloned()
        .unwrap_or_else(|| source::infer_columns(&rows));
    let searchable = [&args.search, &file.searchable]
        .into_iter()
        .find(|keys| !keys.is_empty())
        .cloned()
        .unwrap_or_else(|| keys.clone());
    let hidden = if args.hide.is_empty() {
        file.hidden
    } else {
        args.hide.clone()
    };

    debug!("Columns: {:?}, searchable: {:?}", keys, searchable);

    let columns = keys.iter().map(|k| source::field_column(k)).collect();
    let mut builder = DataGrid::builder(columns)
        .searchable(&searchable)
        .hidden(&hidden)
        .config(config)
        .rows(rows);
    if let Some(key) = args.key.clone() {
        builder = builder.row_key(move |row: &JsonRow| {
            row.get(&key)
                .map(|v| datagrid::Value::from_json(v.clone()).to_string())
                .unwrap_or_default()
        });
    }
    Ok(builder.build()?)
}

fn run(args: &Args) -> Result<String, CliError> {
    let grid = build_grid(args)?;

    if let Some(query) = &args.query
        && !grid.set_query(query.as_str())
        && !query.trim().is_empty()
    {
        warn!("Query '{}' was not applied", query);
    }

    if let Some((column, descending)) = args.sort_spec() {
        let toggles = if descending { 2 } else { 1 };
        for _ in 0..toggles {
            if grid.toggle_sort(column).is_none() {
                warn!("Column '{}' cannot be sorted", column);
                break;
            }
        }
    }

    grid.set_page_index(args.page.saturating_sub(1));
    grid.set_loading(args.loading);

    Ok(table::render(&grid.view()))
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logger(&args) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
