//! Common types for the game field: shot outcomes and validation errors.

use core::fmt;

use super::bitboard::BitBoardError;

/// Outcome of a shot at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The cell held a ship segment.
    Hit,
    /// The cell was open water.
    Miss,
}

impl GuessResult {
    pub fn is_hit(self) -> bool {
        self == GuessResult::Hit
    }
}

/// Why a ship could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Endpoints share neither a row nor a column.
    NotStraight,
    /// Segment does not match the length of the ship being placed.
    WrongLength {
        ship: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Segment overlaps or touches an already placed ship.
    TooClose,
    /// All ships of the fleet are already on the field.
    FleetComplete,
    /// Random placement found no free space for the ship.
    NoSpace { ship: &'static str },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NotStraight => write!(f, "Error! Wrong ship location!"),
            PlacementError::WrongLength {
                ship,
                expected,
                actual,
            } => write!(
                f,
                "Error! Wrong length of the {}! Expected {} cells, got {}.",
                ship, expected, actual
            ),
            PlacementError::TooClose => {
                write!(f, "Error! You placed it too close to another one.")
            }
            PlacementError::FleetComplete => write!(f, "Error! All ships are already placed."),
            PlacementError::NoSpace { ship } => {
                write!(f, "Error! No free space left for the {}.", ship)
            }
        }
    }
}

/// Errors returned by field operations. A failed operation never mutates the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Malformed, missing or out-of-range coordinate.
    InvalidCoordinate,
    /// Placement rejected for the carried reason.
    InvalidPlacement(PlacementError),
}

impl From<PlacementError> for FieldError {
    fn from(err: PlacementError) -> Self {
        FieldError::InvalidPlacement(err)
    }
}

impl From<BitBoardError> for FieldError {
    fn from(_: BitBoardError) -> Self {
        FieldError::InvalidCoordinate
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidCoordinate => write!(f, "Error! You entered the wrong coordinate!"),
            FieldError::InvalidPlacement(reason) => write!(f, "{}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}
