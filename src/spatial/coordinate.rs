//! Logical grid addressing
//!
//! Tiles are addressed by `(row, column)`. Whether the first row is 0 or 1 is a
//! board setting (`index_base`); coordinates themselves are plain signed pairs
//! so that neighbor offsets can step off the board without overflow.

use std::fmt;
use std::str::FromStr;

/// Immutable `(row, column)` address of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoordinate {
    /// Row number
    pub row: i32,
    /// Column number
    pub column: i32,
}

impl GridCoordinate {
    /// Create a coordinate
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Row number is even (negative rows use Euclidean parity)
    pub const fn row_is_even(self) -> bool {
        self.row.rem_euclid(2) == 0
    }

    /// Column number is even (negative columns use Euclidean parity)
    pub const fn column_is_even(self) -> bool {
        self.column.rem_euclid(2) == 0
    }

    /// Coordinate reached by stepping `offset`, or `None` on `i32` overflow
    pub const fn checked_offset(self, offset: GridOffset) -> Option<Self> {
        match (
            self.row.checked_add(offset.rows),
            self.column.checked_add(offset.columns),
        ) {
            (Some(row), Some(column)) => Some(Self { row, column }),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for GridCoordinate {
    fn from((row, column): (i32, i32)) -> Self {
        Self { row, column }
    }
}

impl From<GridCoordinate> for (i32, i32) {
    fn from(value: GridCoordinate) -> Self {
        (value.row, value.column)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// Error returned when a coordinate string is not of the form `row,column`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordinateError {
    input: String,
}

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 'row,column', found '{}'", self.input)
    }
}

impl std::error::Error for ParseCoordinateError {}

impl FromStr for GridCoordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseCoordinateError {
            input: s.to_string(),
        };

        let (row, column) = s.split_once(',').ok_or_else(error)?;
        let row = row.trim().parse().ok().ok_or_else(error)?;
        let column = column.trim().parse().ok().ok_or_else(error)?;

        Ok(Self { row, column })
    }
}

/// Relative step in `(row, column)` space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridOffset {
    /// Row delta
    pub rows: i32,
    /// Column delta
    pub columns: i32,
}

impl GridOffset {
    /// Create an offset
    pub const fn new(rows: i32, columns: i32) -> Self {
        Self { rows, columns }
    }
}
