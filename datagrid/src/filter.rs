//! Filter stage: free-text search over the searchable columns.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Deserialize;
use serde::Serialize;

use crate::column::ColumnDescriptor;

/// How a search query matches cell text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Case-insensitive substring of the cell's canonical string.
    #[default]
    Substring,
    /// Case-insensitive fuzzy match using nucleo-matcher.
    Fuzzy,
}

enum Compiled {
    All,
    Substring(String),
    Fuzzy(Box<(Pattern, Matcher)>),
}

/// A compiled search query.
///
/// A blank query (empty or whitespace only) matches every row. Cell values
/// that are null or fail to read never match.
///
/// # Example
///
/// ```
/// use datagrid::{SearchFilter, SearchMode};
///
/// let mut filter = SearchFilter::new("ocean", SearchMode::Substring);
/// assert!(filter.matches_text("Ocean Breeze"));
/// assert!(!filter.matches_text("Urban Kitchen"));
/// ```
pub struct SearchFilter {
    compiled: Compiled,
}

impl SearchFilter {
    /// Compile a query.
    pub fn new(query: &str, mode: SearchMode) -> Self {
        let compiled = if query.trim().is_empty() {
            Compiled::All
        } else {
            match mode {
                SearchMode::Substring => Compiled::Substring(query.to_lowercase()),
                SearchMode::Fuzzy => {
                    let pattern = Pattern::new(
                        query,
                        CaseMatching::Ignore,
                        Normalization::Smart,
                        AtomKind::Fuzzy,
                    );
                    Compiled::Fuzzy(Box::new((pattern, Matcher::new(Config::DEFAULT))))
                }
            }
        };
        Self { compiled }
    }

    /// Check if this filter keeps every row.
    pub fn is_identity(&self) -> bool {
        matches!(self.compiled, Compiled::All)
    }

    /// Check a piece of text against the query.
    pub fn matches_text(&mut self, text: &str) -> bool {
        match &mut self.compiled {
            Compiled::All => true,
            Compiled::Substring(needle) => text.to_lowercase().contains(needle.as_str()),
            Compiled::Fuzzy(state) => {
                let (pattern, matcher) = &mut **state;
                let mut buf = Vec::new();
                let haystack = Utf32Str::new(text, &mut buf);
                pattern.score(haystack, matcher).is_some()
            }
        }
    }

    /// Check whether any searchable column of a row matches.
    pub fn matches_row<R>(&mut self, row: &R, searchable: &[&ColumnDescriptor<R>]) -> bool {
        if self.is_identity() {
            return true;
        }
        searchable.iter().any(|column| match column.read(row) {
            Ok(value) if !value.is_null() => self.matches_text(&value.to_string()),
            _ => false,
        })
    }
}

/// Indices of the rows that match `query`, in their original order.
pub fn filter_indices<R>(
    rows: &[R],
    searchable: &[&ColumnDescriptor<R>],
    query: &str,
    mode: SearchMode,
) -> Vec<usize> {
    let mut filter = SearchFilter::new(query, mode);
    if filter.is_identity() {
        return (0..rows.len()).collect();
    }
    rows.iter()
        .enumerate()
        .filter(|(_, row)| filter.matches_row(*row, searchable))
        .map(|(index, _)| index)
        .collect()
}
