//! Hotseat orchestration: two players share one console and alternate
//! between placing ships and firing at each other's field.

mod hotseat;

pub use hotseat::HotseatGame;

/// Runtime settings for a hotseat game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    pub player_names: [String; 2],
    /// Seed for random ship placement; entropy-seeded when `None`.
    pub seed: Option<u64>,
    /// Clear the terminal when the turn passes so the next player cannot
    /// see the previous player's fleet.
    pub clear_screen: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_names: ["Player 1".into(), "Player 2".into()],
            seed: None,
            clear_screen: true,
        }
    }
}

/// Result of one resolved shot, from the shooter's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Miss,
    Hit,
    Sunk,
    /// The shot sank the opponent's last ship.
    Won,
}

impl TurnOutcome {
    pub fn message(self) -> &'static str {
        match self {
            TurnOutcome::Miss => "You missed!",
            TurnOutcome::Hit => "You hit a ship!",
            TurnOutcome::Sunk => "You sank a ship! Specify a new target:",
            TurnOutcome::Won => "You sank the last ship. You won. Congratulations!",
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub winner: String,
    /// Zero for the first player, one for the second.
    pub winner_index: usize,
    /// Shots resolved over the whole battle, both players included.
    pub turns: usize,
}
