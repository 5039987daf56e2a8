//! Comparator-driven table reordering
//!
//! Rows are plain cell vectors without the header row. A column compares
//! numerically when both cells parse as finite numbers and as
//! case-insensitive text otherwise.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Sort direction of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

fn as_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Compare two cells: numerically if both are numbers, else as lowercase text
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(String::as_str).unwrap_or("")
}

/// Whether every adjacent pair is in order for `direction`
pub fn is_sorted_by_column(rows: &[Vec<String>], column: usize, direction: SortDirection) -> bool {
    rows.windows(2).all(|pair| {
        direction.apply(compare_cells(cell(&pair[0], column), cell(&pair[1], column)))
            != Ordering::Greater
    })
}

/// Sort rows by `column` in an explicit direction
///
/// Stable insertion sort: equal rows keep their relative order. Mixed
/// numeric/text columns are not a total order, so `slice::sort_by` is not
/// used here.
pub fn sort_rows_by(rows: &mut [Vec<String>], column: usize, direction: SortDirection) {
    for i in 1..rows.len() {
        let mut j = i;
        while j > 0
            && direction.apply(compare_cells(cell(&rows[j - 1], column), cell(&rows[j], column)))
                == Ordering::Greater
        {
            rows.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sort rows by `column`, deriving the direction from the current order
///
/// Sorts ascending, unless the column is already ascending, in which case
/// it sorts descending. Returns the direction applied.
pub fn sort_rows(rows: &mut [Vec<String>], column: usize) -> SortDirection {
    let direction = if is_sorted_by_column(rows, column, SortDirection::Asc) {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };

    tracing::debug!(column, %direction, rows = rows.len(), "sorting table");
    sort_rows_by(rows, column, direction);
    direction
}

/// Explicit per-table sort state
///
/// Clicking the active column flips its direction; clicking another column
/// starts ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<usize>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click on `column` and return the direction to apply
    pub fn toggle(&mut self, column: usize) -> SortDirection {
        self.direction = match self.column {
            Some(active) if active == column => self.direction.flipped(),
            _ => SortDirection::Asc,
        };
        self.column = Some(column);
        self.direction
    }

    /// Toggle on `column` and sort `rows` accordingly
    pub fn sort(&mut self, rows: &mut [Vec<String>], column: usize) -> SortDirection {
        let direction = self.toggle(column);
        sort_rows_by(rows, column, direction);
        direction
    }
}
