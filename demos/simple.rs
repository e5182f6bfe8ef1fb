use chess_autopilot::shakmaty::Color;
use chess_autopilot::{Game, SelectionPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Track a fresh game playing White
    let mut game = Game::new(Color::White);

    // 2. Analysis lines as they come off the board, best first,
    //    (uci, evaluation) with evaluations from White's perspective
    let lines = [
        ("e2e4", "0.3"),
        ("d2d4", "0.3"),
        ("g1f3", "0.2"),
        ("c2c4", "0.2"),
        ("b1c3", "0.1"),
    ];

    // 3. Pick a move with the default heuristics
    let policy = SelectionPolicy::with_floor(0.0);
    let chosen = game.choose(&lines, &policy)?;
    println!("Playing {} (eval {:+.2})", chosen.uci, chosen.evaluation);
    game.push_uci(&chosen.uci.to_string())?;

    // 4. The opponent's reply arrives as SAN scraped off the move list
    game.push_san("c5")?;
    println!("Opponent played c5, our turn again: {}", game.is_my_turn());

    // 5. In best-only mode the top line is always taken
    let lines = [("g1f3", "0.4"), ("b1c3", "0.3"), ("c2c3", "0.2")];
    let chosen = game.choose(&lines, &SelectionPolicy::best_only())?;
    println!("Best-only would play {}", chosen.uci);

    Ok(())
}
