use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::{GameOptions, GameSummary, TurnOutcome};
use crate::engine::{Coordinate, FieldError, GameField};

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
const DIVIDER: &str = "---------------------";
const INVALID_PLACEMENT_COORDINATES: &str = "Error! You have not provided valid coordinates.";

/// Two fields driven over a single line-oriented input and output.
pub struct HotseatGame<R, W> {
    fields: [GameField; 2],
    input: R,
    output: W,
    rng: SmallRng,
    clear_screen: bool,
    turns: usize,
}

impl<R: BufRead, W: Write> HotseatGame<R, W> {
    pub fn new(input: R, output: W, options: GameOptions) -> Self {
        let rng = match options.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        };
        let [first, second] = options.player_names;
        Self {
            fields: [GameField::new(first), GameField::new(second)],
            input,
            output,
            rng,
            clear_screen: options.clear_screen,
            turns: 0,
        }
    }

    /// The two players' fields, in seating order.
    pub fn fields(&self) -> &[GameField; 2] {
        &self.fields
    }

    /// Play both setup phases, then alternate shots until one fleet is sunk.
    pub fn run(mut self) -> anyhow::Result<GameSummary> {
        for player in 0..2 {
            self.setup(player).with_context(|| {
                format!("ship placement for {}", self.fields[player].player_name())
            })?;
        }
        info!("all fleets placed, battle begins");

        let mut shooter = 0;
        loop {
            let outcome = self.take_turn(shooter)?;
            if outcome == TurnOutcome::Won {
                let winner = self.fields[shooter].player_name().to_string();
                info!("{} won after {} shots", winner, self.turns);
                return Ok(GameSummary {
                    winner,
                    winner_index: shooter,
                    turns: self.turns,
                });
            }
            self.pass_turn()?;
            shooter = 1 - shooter;
        }
    }

    fn setup(&mut self, player: usize) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "{}, place your ships on the game field\n",
            self.fields[player].player_name()
        )?;
        write!(self.output, "{}", self.fields[player].ship_layout())?;

        while let Some(kind) = self.fields[player].next_ship() {
            writeln!(
                self.output,
                "\nEnter the coordinates of the {} ({} cells) or press Enter to place it randomly",
                kind.name(),
                kind.length()
            )?;
            loop {
                let line = self.read_line()?;
                match self.place_from_line(player, &line) {
                    Ok(()) => break,
                    Err(FieldError::InvalidCoordinate) => {
                        writeln!(self.output, "{} Try again:", INVALID_PLACEMENT_COORDINATES)?
                    }
                    Err(e) => writeln!(self.output, "{} Try again:", e)?,
                }
            }
            writeln!(self.output)?;
            write!(self.output, "{}", self.fields[player].ship_layout())?;
        }
        info!("{} finished placing ships", self.fields[player].player_name());
        self.pass_turn()
    }

    fn place_from_line(&mut self, player: usize, line: &str) -> Result<(), FieldError> {
        let field = &mut self.fields[player];
        if line.is_empty() {
            return field.place_next_ship_randomly(&mut self.rng);
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [first, second] => {
                let first: Coordinate = first.parse()?;
                let second: Coordinate = second.parse()?;
                field.place_next_ship(first, second)
            }
            _ => Err(FieldError::InvalidCoordinate),
        }
    }

    fn take_turn(&mut self, shooter: usize) -> anyhow::Result<TurnOutcome> {
        let target = 1 - shooter;
        write!(self.output, "{}", self.fields[target].shot_record())?;
        writeln!(self.output, "{}", DIVIDER)?;
        write!(self.output, "{}", self.fields[shooter].ship_layout())?;
        writeln!(
            self.output,
            "\n{}, it's your turn:",
            self.fields[shooter].player_name()
        )?;

        loop {
            let line = self.read_line()?;
            match self.fire(target, &line) {
                Ok(outcome) => {
                    self.turns += 1;
                    writeln!(self.output, "{}", outcome.message())?;
                    return Ok(outcome);
                }
                Err(e) => writeln!(self.output, "{} Try again:", e)?,
            }
        }
    }

    fn fire(&mut self, target: usize, line: &str) -> Result<TurnOutcome, FieldError> {
        let coordinate: Coordinate = line.parse()?;
        let field = &mut self.fields[target];
        if !field.shoot(coordinate)?.is_hit() {
            Ok(TurnOutcome::Miss)
        } else if field.are_all_ships_sunk() {
            Ok(TurnOutcome::Won)
        } else if field.is_ship_sunk(coordinate) {
            Ok(TurnOutcome::Sunk)
        } else {
            Ok(TurnOutcome::Hit)
        }
    }

    fn pass_turn(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\nPress Enter and pass the move to another player")?;
        self.read_line()?;
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            )
            .into());
        }
        Ok(line.trim().to_string())
    }
}
