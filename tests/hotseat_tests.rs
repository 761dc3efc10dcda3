use std::io::{self, Cursor};

use battleship::{GameOptions, HotseatGame, TurnOutcome};

const FLEET: [&str; 5] = ["A1 A5", "A7 A10", "C1 C3", "C5 C7", "E1 E2"];

/// Ship cells of `FLEET`, in the order ships were placed.
const TARGETS: [&str; 17] = [
    "A1", "A2", "A3", "A4", "A5", "A7", "A8", "A9", "A10", "C1", "C2", "C3", "C5", "C6", "C7",
    "E1", "E2",
];

const WATER: [&str; 16] = [
    "G1", "G2", "G3", "G4", "G5", "G6", "G7", "G8", "G9", "G10", "I1", "I2", "I3", "I4", "I5",
    "I6",
];

fn options() -> GameOptions {
    GameOptions {
        seed: Some(7),
        clear_screen: false,
        ..GameOptions::default()
    }
}

fn scripted_input() -> String {
    let mut lines: Vec<&str> = Vec::new();
    lines.extend(FLEET);
    lines.push("");
    // Second player fumbles one placement and one shot format first.
    lines.push("A1 B2");
    lines.push("A1");
    lines.extend(FLEET);
    lines.push("");
    for (i, target) in TARGETS.into_iter().enumerate() {
        if i == 3 {
            lines.push("Z99");
        }
        lines.push(target);
        if let Some(&water) = WATER.get(i) {
            lines.push("");
            lines.push(water);
            lines.push("");
        }
    }
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

#[test]
fn first_player_wins_scripted_game() {
    let mut output = Vec::new();
    let game = HotseatGame::new(Cursor::new(scripted_input()), &mut output, options());
    let summary = game.run().unwrap();

    assert_eq!(summary.winner, "Player 1");
    assert_eq!(summary.winner_index, 0);
    assert_eq!(summary.turns, 33);

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Player 1, place your ships on the game field"));
    assert!(text.contains("Player 2, place your ships on the game field"));
    assert!(text.contains("Enter the coordinates of the Aircraft Carrier (5 cells)"));
    assert!(text.contains("Error! Wrong ship location! Try again:"));
    assert!(text.contains("Player 2, it's your turn:"));
    assert_eq!(text.matches("Error! You entered the wrong coordinate! Try again:").count(), 1);
    assert_eq!(
        text.matches("Error! You have not provided valid coordinates. Try again:").count(),
        1
    );
    assert_eq!(text.matches(TurnOutcome::Miss.message()).count(), 16);
    assert_eq!(text.matches(TurnOutcome::Hit.message()).count(), 12);
    assert_eq!(text.matches("You sank a ship!").count(), 4);
    assert!(text.ends_with("You sank the last ship. You won. Congratulations!\n"));
    assert!(!text.contains("\x1b[2J"));
}

#[test]
fn clears_screen_between_turns_when_enabled() {
    let mut output = Vec::new();
    let options = GameOptions {
        clear_screen: true,
        ..options()
    };
    let game = HotseatGame::new(Cursor::new(scripted_input()), &mut output, options);
    game.run().unwrap();
    let text = String::from_utf8(output).unwrap();
    // two setup hand-overs plus one after each of the 32 non-winning shots
    assert_eq!(text.matches("\x1b[H\x1b[2J").count(), 34);
}

#[test]
fn custom_names_appear_in_prompts() {
    let mut output = Vec::new();
    let options = GameOptions {
        player_names: ["Ahab".into(), "Nemo".into()],
        ..options()
    };
    let game = HotseatGame::new(Cursor::new(scripted_input()), &mut output, options);
    let summary = game.run().unwrap();
    assert_eq!(summary.winner, "Ahab");
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Nemo, it's your turn:"));
}

#[test]
fn empty_lines_place_ships_randomly_and_reproducibly() {
    let input = "\n".repeat(12);
    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut output = Vec::new();
        let game = HotseatGame::new(Cursor::new(input.clone()), &mut output, options());
        let err = game.run().unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
        runs.push(String::from_utf8(output).unwrap());
    }
    assert_eq!(runs[0], runs[1]);
    assert!(runs[0].contains("Player 1, it's your turn:"));
    assert!(!runs[0].contains("Try again"));
}

#[test]
fn out_of_range_placement_uses_placement_message() {
    let mut output = Vec::new();
    let game = HotseatGame::new(Cursor::new("A0 A4\nA1 K1\n"), &mut output, options());
    assert!(game.run().is_err());
    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text.matches("Error! You have not provided valid coordinates. Try again:").count(),
        2
    );
    assert!(!text.contains("You entered the wrong coordinate"));
}

#[test]
fn closed_input_is_reported() {
    let mut output = Vec::new();
    let game = HotseatGame::new(Cursor::new("A1 A5\n"), &mut output, options());
    let err = game.run().unwrap_err();
    let io_err = err.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn fields_start_empty() {
    let game = HotseatGame::new(Cursor::new(""), Vec::new(), GameOptions::default());
    let [first, second] = game.fields();
    assert_eq!(first.player_name(), "Player 1");
    assert_eq!(second.player_name(), "Player 2");
    assert_eq!(first.ships_placed(), 0);
}
