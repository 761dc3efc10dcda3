//! Grid positions parsed from player input such as `B5`.

use core::fmt;
use core::str::FromStr;

use super::common::FieldError;
use super::config::BOARD_SIZE;

/// A (row, column) position on the field, zero-based.
///
/// Values are not range checked when parsed; `A0` or `K1` produce a
/// coordinate that the field later rejects as out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    pub(crate) const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Parse a token made of a row letter followed by a one-based column.
    ///
    /// The token must be two or three characters long and start with a
    /// letter. The row is the letter's offset from `'A'`, so lowercase
    /// letters map past the last row. Returns `None` when the column part
    /// is not an integer.
    pub fn parse(token: &str) -> Option<Self> {
        let len = token.chars().count();
        if len != 2 && len != 3 {
            return None;
        }
        let mut chars = token.chars();
        let letter = chars.next()?;
        if !letter.is_alphabetic() {
            return None;
        }
        let row = letter as i32 - 'A' as i32;
        let col = chars.as_str().parse::<i32>().ok()?.checked_sub(1)?;
        Some(Self::new(row, col))
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// `true` when the position lies on the 10×10 grid.
    pub fn in_range(&self) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Grid indices, or `None` when out of range.
    pub fn indices(&self) -> Option<(usize, usize)> {
        if self.in_range() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }
}

impl FromStr for Coordinate {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s).ok_or(FieldError::InvalidCoordinate)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_range() {
            let letter = (b'A' + self.row as u8) as char;
            write!(f, "{}{}", letter, self.col + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}
