#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship::{init_logging, GameOptions, HotseatGame};
#[cfg(feature = "std")]
use clap::Parser;

/// Two-player battleship on one console.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value = "Player 1")]
    player_one: String,
    #[arg(long, default_value = "Player 2")]
    player_two: String,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Keep previous output on screen when the turn passes")]
    no_clear: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (random placement will be reproducible)", s);
    }

    let options = GameOptions {
        player_names: [cli.player_one, cli.player_two],
        seed: cli.seed,
        clear_screen: !cli.no_clear,
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let game = HotseatGame::new(stdin.lock(), stdout.lock(), options);
    let summary = game.run()?;
    log::info!(
        "game over: {} won in {} shots",
        summary.winner,
        summary.turns
    );
    Ok(())
}
