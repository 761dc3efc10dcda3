//! One participant's field: ship placement, shot resolution and sunk detection.

use alloc::string::String;
use log::{debug, trace};
use rand::Rng;

use super::bitboard::BitBoard;
use super::common::{FieldError, GuessResult, PlacementError};
use super::config::{BOARD_SIZE, NUM_SHIPS, RANDOM_PLACEMENT_ATTEMPTS, TOTAL_SHIP_CELLS};
use super::coordinate::Coordinate;
use super::grid::{Grid, LayoutCell, ShotCell};
use super::ship::{ShipCursor, ShipKind};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const LAST: isize = BOARD_SIZE as isize - 1;

/// Ship layout and shot record of a single player.
///
/// Both views are projections of the same `hits` and `misses` layers, so a
/// shot recorded in one is always visible in the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameField {
    player_name: String,
    ships: BB,
    hits: BB,
    misses: BB,
    cursor: ShipCursor,
    ships_placed: usize,
    hit_count: usize,
}

impl GameField {
    /// Empty field with no ships placed and no shots taken.
    pub fn new(player_name: impl Into<String>) -> Self {
        GameField {
            player_name: player_name.into(),
            ships: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
            cursor: ShipCursor::first(),
            ships_placed: 0,
            hit_count: 0,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Kind that the next call to [`place_next_ship`](Self::place_next_ship)
    /// must place, or `None` once the fleet is complete.
    pub fn next_ship(&self) -> Option<ShipKind> {
        if self.is_fleet_complete() {
            None
        } else {
            Some(self.cursor.kind())
        }
    }

    pub fn ships_placed(&self) -> usize {
        self.ships_placed
    }

    pub fn is_fleet_complete(&self) -> bool {
        self.ships_placed == NUM_SHIPS
    }

    /// Ship cells hit so far.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Placed ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        (self.ships & !self.hits).count_ones()
    }

    /// Validate a segment for the next ship without placing it.
    pub fn check_placement(
        &self,
        first: Coordinate,
        second: Coordinate,
    ) -> Result<(), FieldError> {
        self.segment_for(first, second).map(|_| ())
    }

    /// Place the next ship of the fleet between two endpoints (inclusive).
    ///
    /// The segment must be straight, exactly as long as the ship and keep a
    /// one-cell gap, diagonals included, to every ship already on the field.
    pub fn place_next_ship(
        &mut self,
        first: Coordinate,
        second: Coordinate,
    ) -> Result<(), FieldError> {
        let segment = self.segment_for(first, second)?;
        let kind = self.cursor.kind();
        self.ships |= segment;
        self.cursor = self.cursor.next();
        self.ships_placed += 1;
        debug!("{}: placed {} at {}-{}", self.player_name, kind.name(), first, second);
        Ok(())
    }

    /// Place the next ship at a random valid position.
    pub fn place_next_ship_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), FieldError> {
        let (first, second) = self.random_placement(rng)?;
        self.place_next_ship(first, second)
    }

    /// Randomly place every ship still missing from the fleet.
    pub fn place_remaining_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), FieldError> {
        while !self.is_fleet_complete() {
            self.place_next_ship_randomly(rng)?;
        }
        Ok(())
    }

    /// Find endpoints at which the next ship may be placed.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Coordinate, Coordinate), FieldError> {
        let kind = self.next_ship().ok_or(PlacementError::FleetComplete)?;
        let span = kind.length() as i32 - 1;
        let size = BOARD_SIZE as i32;
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let (first, second) = if rng.random() {
                let row = rng.random_range(0..size);
                let col = rng.random_range(0..size - span);
                (Coordinate::new(row, col), Coordinate::new(row, col + span))
            } else {
                let row = rng.random_range(0..size - span);
                let col = rng.random_range(0..size);
                (Coordinate::new(row, col), Coordinate::new(row + span, col))
            };
            if self.check_placement(first, second).is_ok() {
                return Ok((first, second));
            }
        }
        Err(PlacementError::NoSpace { ship: kind.name() }.into())
    }

    /// Fire at `target`.
    ///
    /// Shooting a cell that was already resolved returns the earlier outcome
    /// and changes nothing.
    pub fn shoot(&mut self, target: Coordinate) -> Result<GuessResult, FieldError> {
        let (row, col) = target.indices().ok_or(FieldError::InvalidCoordinate)?;
        if self.hits.get(row, col)? {
            return Ok(GuessResult::Hit);
        }
        if self.misses.get(row, col)? {
            return Ok(GuessResult::Miss);
        }
        if self.ships.get(row, col)? {
            self.hits.set(row, col)?;
            self.hit_count += 1;
            debug!("{}: hit at {}", self.player_name, target);
            Ok(GuessResult::Hit)
        } else {
            self.misses.set(row, col)?;
            debug!("{}: miss at {}", self.player_name, target);
            Ok(GuessResult::Miss)
        }
    }

    /// Whether the hit at `target` finished off its ship.
    ///
    /// Scans outwards along the row and the column, skipping hit cells; the
    /// ship is still afloat if the first cell past the run of hits is an
    /// unhit ship segment. Skipping stops one cell short of the grid edge.
    /// This looks at raw cells rather than ship identity.
    pub fn is_ship_sunk(&self, target: Coordinate) -> bool {
        let Some((row, col)) = target.indices() else {
            return false;
        };
        if self.layout_cell(row, col) != LayoutCell::Hit {
            return false;
        }
        let (row, col) = (row as isize, col as isize);
        let horizontal = self.side_clear(|i| (row, i), col);
        let vertical = self.side_clear(|i| (i, col), row);
        trace!(
            "{}: sunk scan at {} horizontal={} vertical={}",
            self.player_name,
            target,
            horizontal,
            vertical
        );
        horizontal && vertical
    }

    /// `true` once every ship cell of the fleet has been hit.
    pub fn are_all_ships_sunk(&self) -> bool {
        self.hit_count == TOTAL_SHIP_CELLS
    }

    /// Full layout as seen by the owner.
    pub fn ship_layout(&self) -> Grid<LayoutCell> {
        Grid::from_fn(|r, c| self.layout_cell(r, c))
    }

    /// Shots taken at this field as seen by the opponent.
    pub fn shot_record(&self) -> Grid<ShotCell> {
        Grid::from_fn(|r, c| {
            if self.hits.get(r, c).unwrap_or(false) {
                ShotCell::Hit
            } else if self.misses.get(r, c).unwrap_or(false) {
                ShotCell::Miss
            } else {
                ShotCell::Unknown
            }
        })
    }

    fn layout_cell(&self, row: usize, col: usize) -> LayoutCell {
        if self.hits.get(row, col).unwrap_or(false) {
            LayoutCell::Hit
        } else if self.misses.get(row, col).unwrap_or(false) {
            LayoutCell::Miss
        } else if self.ships.get(row, col).unwrap_or(false) {
            LayoutCell::Ship
        } else {
            LayoutCell::Empty
        }
    }

    /// Scan both directions of one axis from `at`; `cell` maps an axis index
    /// to a grid position.
    fn side_clear(&self, cell: impl Fn(isize) -> (isize, isize), at: isize) -> bool {
        let layout = |i: isize| {
            let (r, c) = cell(i);
            self.layout_cell(r as usize, c as usize)
        };

        let mut low = if at > 0 { at - 1 } else { at };
        if low != at {
            while low - 1 > 0 && layout(low) == LayoutCell::Hit {
                low -= 1;
            }
            if layout(low) == LayoutCell::Ship {
                return false;
            }
        }

        let mut high = if at < LAST { at + 1 } else { at };
        if high != at {
            while high + 1 < LAST && layout(high) == LayoutCell::Hit {
                high += 1;
            }
            if layout(high) == LayoutCell::Ship {
                return false;
            }
        }

        true
    }

    /// Validate a placement and return the cells the ship would cover.
    fn segment_for(&self, first: Coordinate, second: Coordinate) -> Result<BB, FieldError> {
        let (r1, c1) = first.indices().ok_or(FieldError::InvalidCoordinate)?;
        let (r2, c2) = second.indices().ok_or(FieldError::InvalidCoordinate)?;
        let kind = self.next_ship().ok_or(PlacementError::FleetComplete)?;

        let actual = if r1 == r2 {
            c1.abs_diff(c2) + 1
        } else if c1 == c2 {
            r1.abs_diff(r2) + 1
        } else {
            return Err(PlacementError::NotStraight.into());
        };
        if actual != kind.length() {
            return Err(PlacementError::WrongLength {
                ship: kind.name(),
                expected: kind.length(),
                actual,
            }
            .into());
        }

        let (top, bottom) = (r1.min(r2), r1.max(r2));
        let (left, right) = (c1.min(c2), c1.max(c2));
        let last = LAST as usize;
        let buffer = BB::rect(
            top.saturating_sub(1),
            left.saturating_sub(1),
            (bottom + 1).min(last),
            (right + 1).min(last),
        )?;
        let occupied = self.ships | self.hits | self.misses;
        if !(occupied & buffer).is_empty() {
            return Err(PlacementError::TooClose.into());
        }

        Ok(BB::rect(top, left, bottom, right)?)
    }
}
