//! Ship kinds and the placement cursor that walks them in order.

use core::fmt;

use super::config::{NUM_SHIPS, SHIPS};

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipKind {
    name: &'static str,
    length: usize,
}

impl ShipKind {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells the ship occupies.
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cells)", self.name, self.length)
    }
}

/// Index into [`SHIPS`] naming the next kind to place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipCursor(usize);

impl ShipCursor {
    /// Cursor positioned at the first kind of the fleet.
    pub const fn first() -> Self {
        ShipCursor(0)
    }

    pub fn kind(&self) -> ShipKind {
        SHIPS[self.0]
    }

    /// Following kind, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        ShipCursor((self.0 + 1) % NUM_SHIPS)
    }
}
