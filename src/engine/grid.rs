//! Read-only cell views of a field, rendered with row letters and column numbers.

use core::fmt;

use super::config::BOARD_SIZE;

const SIZE: usize = BOARD_SIZE as usize;

/// Character drawn for a cell.
pub trait Glyph: Copy {
    fn glyph(self) -> char;
}

/// Cell of the owner's full layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutCell {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// Cell of the shot record: what the opponent has learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotCell {
    Unknown,
    Hit,
    Miss,
}

impl Glyph for LayoutCell {
    fn glyph(self) -> char {
        match self {
            LayoutCell::Empty => '~',
            LayoutCell::Ship => 'O',
            LayoutCell::Hit => 'X',
            LayoutCell::Miss => 'M',
        }
    }
}

impl Glyph for ShotCell {
    fn glyph(self) -> char {
        match self {
            ShotCell::Unknown => '~',
            ShotCell::Hit => 'X',
            ShotCell::Miss => 'M',
        }
    }
}

/// Snapshot of one view of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid<C> {
    cells: [[C; SIZE]; SIZE],
}

impl<C: Glyph> Grid<C> {
    pub(crate) fn from_fn(mut f: impl FnMut(usize, usize) -> C) -> Self {
        Grid {
            cells: core::array::from_fn(|r| core::array::from_fn(|c| f(r, c))),
        }
    }

    /// Cell at (row, col); `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<C> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Number of cells equal to `cell`.
    pub fn count(&self, cell: C) -> usize
    where
        C: PartialEq,
    {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }
}

impl<C: Glyph> fmt::Display for Grid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 1..=SIZE {
            write!(f, "{} ", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", (b'A' + r as u8) as char)?;
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
