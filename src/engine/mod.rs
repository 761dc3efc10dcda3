//! Game-field model (`no_std` compatible).
//!
//! Everything here is pure state and validation: parsing coordinates,
//! placing ships, resolving shots and answering sunk/won queries. Reading
//! input and printing belong to the `game` module.

pub mod bitboard;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod field;
pub mod grid;
pub mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::{FieldError, GuessResult, PlacementError};
pub use config::*;
pub use coordinate::Coordinate;
pub use field::GameField;
pub use grid::{Glyph, Grid, LayoutCell, ShotCell};
pub use ship::{ShipCursor, ShipKind};
