//! Sort stage: single-column, stable, value-type aware ordering.

use std::borrow::Cow;
use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::column::ColumnDescriptor;
use crate::error::FieldError;
use crate::value::Value;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Input order.
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Check if this direction reorders rows.
    pub fn is_active(&self) -> bool {
        !matches!(self, SortDirection::None)
    }

    /// Header indicator for this direction.
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::None => "",
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    /// The direction a header click moves to.
    pub fn next(self, cycle: SortCycle) -> Self {
        match (self, cycle) {
            (SortDirection::None, _) => SortDirection::Ascending,
            (SortDirection::Ascending, _) => SortDirection::Descending,
            (SortDirection::Descending, SortCycle::TwoState) => SortDirection::Ascending,
            (SortDirection::Descending, SortCycle::ThreeState) => SortDirection::None,
        }
    }
}

/// How repeated header clicks cycle through directions.
///
/// - `TwoState`: none → ascending → descending → ascending → …
/// - `ThreeState`: none → ascending → descending → none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCycle {
    #[default]
    TwoState,
    ThreeState,
}

/// The single active ordering rule of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Key of the sorted column.
    pub column: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a sort spec.
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Sort ascending by a column.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    /// Sort descending by a column.
    pub fn descending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Descending)
    }

    /// Compute the sort that follows a header click on `column`.
    ///
    /// Clicking the active column advances its direction; clicking any other
    /// column replaces the current sort with an ascending one. Returns `None`
    /// when the cycle lands back on "no sort".
    pub fn toggled(current: Option<&SortSpec>, column: &str, cycle: SortCycle) -> Option<SortSpec> {
        let direction = match current {
            Some(spec) if spec.column == column => spec.direction.next(cycle),
            _ => SortDirection::Ascending,
        };
        direction
            .is_active()
            .then(|| SortSpec::new(column, direction))
    }

    /// Direction for a given column under this spec.
    pub fn direction_of(spec: Option<&SortSpec>, column: &str) -> SortDirection {
        match spec {
            Some(spec) if spec.column == column => spec.direction,
            _ => SortDirection::None,
        }
    }
}

/// Ordering class of a value. Values of different classes never compare by
/// content.
fn class_rank(value: &Value) -> u8 {
    match value {
        Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_) => 0,
        Value::Date(_) | Value::DateTime(_) => 1,
        Value::Bool(_) => 2,
        Value::String(_) | Value::Json(_) => 3,
        Value::Null => 4,
    }
}

/// Sort key of a number: its float value, then the exact value when there is
/// one. Floats come before an exact number that rounds to the same float.
fn numeric_key(value: &Value) -> (f64, Option<Decimal>) {
    (value.as_f64().unwrap_or(f64::NAN), value.as_decimal())
}

fn canonical(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Compare two readable values. This is a total order.
///
/// Values are ranked by class first: numbers, then dates and date-times,
/// then booleans, then text and JSON, then nulls. Within a class:
/// - numbers compare by value across variants; exact numbers that round to
///   the same float are split by their exact value
/// - dates and date-times compare by instant, a date being midnight UTC
/// - booleans compare `false < true`
/// - text and JSON compare their canonical strings byte-lexicographically
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    let (ra, rb) = (class_rank(a), class_rank(b));
    if ra != rb {
        return ra.cmp(&rb);
    }
    match ra {
        0 => {
            let (fa, da) = numeric_key(a);
            let (fb, db) = numeric_key(b);
            fa.total_cmp(&fb).then_with(|| da.cmp(&db))
        }
        1 => a.as_instant().cmp(&b.as_instant()),
        2 => match (a, b) {
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            _ => Ordering::Equal,
        },
        3 => canonical(a).cmp(&canonical(b)),
        _ => Ordering::Equal,
    }
}

/// Compare two accessor results for a sort in `direction`.
///
/// Readable values follow [`compare_values`], reversed for a descending
/// sort. Nulls and failed reads sort last whatever the direction and compare
/// equal among themselves.
pub fn compare_for_sort(
    a: &Result<Value, FieldError>,
    b: &Result<Value, FieldError>,
    direction: SortDirection,
) -> Ordering {
    let a = a.as_ref().ok().filter(|v| !v.is_null());
    let b = b.as_ref().ok().filter(|v| !v.is_null());
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = compare_values(x, y);
            if direction == SortDirection::Descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order row indices by the value of `column`.
///
/// `indices` point into `rows` and are usually the filter stage's output.
/// With `SortDirection::None` they come back untouched. The sort is stable,
/// so rows with equal keys keep their relative input order.
pub fn sort_indices<R>(
    rows: &[R],
    indices: Vec<usize>,
    column: &ColumnDescriptor<R>,
    direction: SortDirection,
) -> Vec<usize> {
    if !direction.is_active() {
        return indices;
    }

    let mut keyed: Vec<(usize, Result<Value, FieldError>)> = indices
        .into_iter()
        .map(|index| (index, column.read(&rows[index])))
        .collect();

    keyed.sort_by(|(_, a), (_, b)| compare_for_sort(a, b, direction));

    keyed.into_iter().map(|(index, _)| index).collect()
}
